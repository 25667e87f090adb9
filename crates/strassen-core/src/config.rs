use crate::error::{Result, StrassenError};

/// Side length at or below which recursion stops, unless overridden.
pub const DEFAULT_CUTOFF: usize = 32;

/// Configuration for [`StrassenMultiplier`](crate::StrassenMultiplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenConfig {
    cutoff: usize,
}

impl StrassenConfig {
    /// # Errors
    /// Returns `InvalidCutoff` if `cutoff` is 0.
    pub fn new(cutoff: usize) -> Result<Self> {
        if cutoff == 0 {
            return Err(StrassenError::InvalidCutoff(cutoff));
        }
        Ok(StrassenConfig { cutoff })
    }

    /// Side length at or below which the linear multiplier takes over.
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }
}

impl Default for StrassenConfig {
    fn default() -> Self {
        StrassenConfig {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoff() {
        assert_eq!(StrassenConfig::default().cutoff(), 32);
    }

    #[test]
    fn test_zero_cutoff_rejected() {
        assert_eq!(
            StrassenConfig::new(0).unwrap_err(),
            StrassenError::InvalidCutoff(0)
        );
        assert_eq!(StrassenConfig::new(1).unwrap().cutoff(), 1);
    }
}
