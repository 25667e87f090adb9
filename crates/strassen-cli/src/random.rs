use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strassen_core::Buffer;

/// A seeded generator, or one seeded from OS entropy when `seed` is `None`.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A `dimension x dimension` matrix of uniformly random 0/1 entries.
pub fn random_binary<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Buffer {
    let out = Buffer::new(dimension);
    let view = out.view();
    for row in 0..dimension {
        for col in 0..dimension {
            view.set(row, col, rng.gen_range(0..2));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_binary() {
        let mut rng = make_rng(Some(42));
        let m = random_binary(16, &mut rng);
        assert_eq!(m.dimension(), 16);
        assert!(m.to_vec().iter().all(|&v| v == 0 || v == 1));
        // 256 fair coin flips are all-equal with negligible probability.
        assert!(m.to_vec().contains(&0) && m.to_vec().contains(&1));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = random_binary(8, &mut make_rng(Some(7)));
        let b = random_binary(8, &mut make_rng(Some(7)));
        assert_eq!(a, b);
    }
}
