use std::fmt;

/// Operation counts accumulated by a multiplication.
///
/// Supplied by the caller and threaded through the recursion; nothing is
/// counted in global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpStats {
    /// Scalar multiplications.
    pub multiplications: u64,
    /// Scalar additions and subtractions, including base-case accumulation.
    pub additions: u64,
    /// Matrix entries allocated for padded operands, output and scratch.
    pub elements_allocated: u64,
}

impl OpStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the counts of `other` into `self`.
    pub fn merge(&mut self, other: &OpStats) {
        self.multiplications += other.multiplications;
        self.additions += other.additions;
        self.elements_allocated += other.elements_allocated;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One `n x n` triple-loop accumulation.
    pub(crate) fn record_linear(&mut self, n: usize) {
        let cube = (n as u64).pow(3);
        self.multiplications += cube;
        self.additions += cube;
    }

    /// One elementwise sum or difference over an `n x n` view.
    pub(crate) fn record_elementwise(&mut self, n: usize) {
        self.additions += (n as u64).pow(2);
    }

    pub(crate) fn record_allocation(&mut self, elements: usize) {
        self.elements_allocated += elements as u64;
    }
}

impl fmt::Display for OpStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "additions: {}", self.additions)?;
        writeln!(f, "multiplications: {}", self.multiplications)?;
        write!(f, "elements_allocated: {}", self.elements_allocated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut s = OpStats::new();
        s.record_linear(3);
        s.record_elementwise(2);
        s.record_allocation(16);
        assert_eq!(s.multiplications, 27);
        assert_eq!(s.additions, 31);
        assert_eq!(s.elements_allocated, 16);
    }

    #[test]
    fn test_merge_and_reset() {
        let mut a = OpStats {
            multiplications: 1,
            additions: 2,
            elements_allocated: 3,
        };
        let b = a;
        a.merge(&b);
        assert_eq!(a.additions, 4);
        a.reset();
        assert_eq!(a, OpStats::default());
    }

    #[test]
    fn test_display() {
        let s = OpStats {
            multiplications: 8,
            additions: 12,
            elements_allocated: 0,
        };
        assert_eq!(
            s.to_string(),
            "additions: 12\nmultiplications: 8\nelements_allocated: 0"
        );
    }
}
