//! Cross-checks a product against the linear multiplier.
//!
//! A mismatch means the recursive engine is wrong. Callers should treat it
//! as fatal rather than try to recover.

use crate::buffer::Buffer;
use crate::element::Element;
use crate::error::{Result, StrassenError};
use crate::multiply::{LinearMultiplier, Multiplier};

/// Recompute `a x b` with the linear multiplier and compare it to `product`.
///
/// # Errors
/// Returns the operand errors of the linear multiplier, `DimensionMismatch`
/// if `product` has a different side, and `VerificationMismatch` for the
/// first differing cell in row-major order.
pub fn verify<T: Element>(a: &Buffer<T>, b: &Buffer<T>, product: &Buffer<T>) -> Result<()> {
    let reference = LinearMultiplier::new().multiply(a, b)?;
    compare(&reference, product)
}

/// Compare `got` against an already computed `expected` buffer, cell by cell.
pub fn compare<T: Element>(expected: &Buffer<T>, got: &Buffer<T>) -> Result<()> {
    if expected.dimension() != got.dimension() {
        return Err(StrassenError::DimensionMismatch {
            a: expected.dimension(),
            b: got.dimension(),
        });
    }

    let (ev, gv) = (expected.view(), got.view());
    let n = expected.dimension();
    for row in 0..n {
        for col in 0..n {
            let (e, g) = (ev.get(row, col), gv.get(row, col));
            if e != g {
                return Err(StrassenError::VerificationMismatch {
                    row,
                    col,
                    expected: e.to_string(),
                    got: g.to_string(),
                });
            }
        }
    }
    Ok(())
}
