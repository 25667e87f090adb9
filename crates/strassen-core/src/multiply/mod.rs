pub mod linear;
pub mod strassen;

use std::fmt::Debug;

use crate::buffer::Buffer;
use crate::config::StrassenConfig;
use crate::element::Element;
use crate::error::{Result, StrassenError};
use crate::stats::OpStats;
use crate::view::View;

pub use linear::LinearMultiplier;
pub use strassen::StrassenMultiplier;

/// A square matrix multiplication strategy: C = A x B.
pub trait Multiplier<T: Element>: Debug {
    /// Returns the name of this strategy (e.g., "linear", "strassen").
    fn name(&self) -> &str;

    /// Multiply two equally sized views, accumulating operation counts into
    /// `stats`. Returns a new buffer with the same side as the operands.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the sides differ and
    /// `InvalidDimension` if they are zero.
    fn multiply_with_stats(
        &self,
        a: View<'_, T>,
        b: View<'_, T>,
        stats: &mut OpStats,
    ) -> Result<Buffer<T>>;

    /// Multiply two buffers, discarding operation counts.
    fn multiply(&self, a: &Buffer<T>, b: &Buffer<T>) -> Result<Buffer<T>> {
        let mut stats = OpStats::new();
        self.multiply_with_stats(a.view(), b.view(), &mut stats)
    }
}

/// Multiply `a` and `b` with Strassen's algorithm, switching to the linear
/// multiplier at or below `cutoff`.
///
/// # Errors
/// Returns `InvalidCutoff` for a zero cutoff, and the operand errors of
/// [`Multiplier::multiply_with_stats`].
pub fn strassen_multiply<T: Element>(
    a: &Buffer<T>,
    b: &Buffer<T>,
    cutoff: usize,
) -> Result<Buffer<T>> {
    StrassenMultiplier::new(StrassenConfig::new(cutoff)?).multiply(a, b)
}

/// Multiply `a` and `b` with the triple-loop multiplier.
pub fn linear_multiply<T: Element>(a: &Buffer<T>, b: &Buffer<T>) -> Result<Buffer<T>> {
    LinearMultiplier::new().multiply(a, b)
}

/// Checks that both operands share one non-zero side and returns it.
pub(crate) fn check_operands<T: Element>(a: View<'_, T>, b: View<'_, T>) -> Result<usize> {
    if a.size() != b.size() {
        return Err(StrassenError::DimensionMismatch {
            a: a.size(),
            b: b.size(),
        });
    }
    if a.size() == 0 {
        return Err(StrassenError::InvalidDimension(0));
    }
    Ok(a.size())
}
