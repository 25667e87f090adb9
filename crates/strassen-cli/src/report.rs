use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed wall-clock time.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Format as whole seconds plus remaining milliseconds, e.g. `2s 15ms`.
pub fn format_duration(d: Duration) -> String {
    format!("{}s {}ms", d.as_secs(), d.subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(2015)), "2s 15ms");
        assert_eq!(format_duration(Duration::from_micros(999)), "0s 0ms");
    }

    #[test]
    fn test_timed_returns_value() {
        let (v, elapsed) = timed(|| 6 * 7);
        assert_eq!(v, 42);
        assert!(elapsed < Duration::from_secs(60));
    }
}
