//! Padded working dimension for the recursive multiplier.

/// Number of ceiling-halvings needed to bring `dimension` to at most `cutoff`.
pub fn halvings(dimension: usize, cutoff: usize) -> u32 {
    reduce(dimension, cutoff).1
}

/// Smallest working dimension `final_size * 2^k` reachable from `dimension`
/// by `k` ceiling-halvings down to at most `cutoff`.
///
/// Every level of the recursion on a matrix of this size splits evenly, so
/// quadrant sizes always match until the base case. If `dimension <= cutoff`
/// no padding is needed and `dimension` is returned unchanged.
///
/// A `cutoff` of 0 is treated as 1.
pub fn padded_dimension(dimension: usize, cutoff: usize) -> usize {
    let (size, power) = reduce(dimension, cutoff);
    size << power
}

fn reduce(dimension: usize, cutoff: usize) -> (usize, u32) {
    let cutoff = cutoff.max(1);
    let mut size = dimension;
    let mut power = 0;
    while size > cutoff {
        size = size.div_ceil(2);
        power += 1;
    }
    (size, power)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_padding_at_or_below_cutoff() {
        assert_eq!(padded_dimension(1, 1), 1);
        assert_eq!(padded_dimension(7, 32), 7);
        assert_eq!(padded_dimension(32, 32), 32);
    }

    #[test]
    fn test_five_with_cutoff_two() {
        // 5 -> 3 -> 2: two halvings, final size 2.
        assert_eq!(halvings(5, 2), 2);
        assert_eq!(padded_dimension(5, 2), 8);
    }

    #[test]
    fn test_powers_of_two_unchanged() {
        for cutoff in 1..=8 {
            assert_eq!(padded_dimension(64, cutoff), 64);
        }
    }

    #[test]
    fn test_odd_sizes_cutoff_one() {
        assert_eq!(padded_dimension(3, 1), 4);
        assert_eq!(padded_dimension(5, 1), 8);
        assert_eq!(padded_dimension(6, 1), 8);
    }

    #[test]
    fn test_minimal_padding_above_cutoff() {
        assert_eq!(padded_dimension(33, 32), 34);
        assert_eq!(padded_dimension(100, 32), 100);
        assert_eq!(padded_dimension(100, 10), 112);
    }

    #[test]
    fn test_zero_cutoff_treated_as_one() {
        assert_eq!(padded_dimension(5, 0), padded_dimension(5, 1));
        assert_eq!(halvings(1, 0), 0);
    }

    #[test]
    fn test_padded_halves_evenly_down_to_cutoff() {
        for n in 1..200 {
            for cutoff in 1..12 {
                let mut size = padded_dimension(n, cutoff);
                assert!(size >= n);
                while size > cutoff {
                    assert_eq!(size % 2, 0, "n={n} cutoff={cutoff} size={size}");
                    size /= 2;
                }
            }
        }
    }
}
