use crate::buffer::Buffer;
use crate::element::Element;
use crate::error::Result;
use crate::stats::OpStats;
use crate::view::View;

use super::{check_operands, Multiplier};

/// Triple-loop multiplier.
///
/// Used directly as the reference implementation and as the base case of
/// the Strassen recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMultiplier;

impl LinearMultiplier {
    pub fn new() -> Self {
        LinearMultiplier
    }
}

impl<T: Element> Multiplier<T> for LinearMultiplier {
    fn name(&self) -> &str {
        "linear"
    }

    fn multiply_with_stats(
        &self,
        a: View<'_, T>,
        b: View<'_, T>,
        stats: &mut OpStats,
    ) -> Result<Buffer<T>> {
        let n = check_operands(a, b)?;
        let c = Buffer::new(n);
        stats.record_allocation(n * n);
        accumulate(a, b, c.view(), stats);
        Ok(c)
    }
}

/// `c += a x b` over `c`'s side, in k-i-j order.
///
/// Only adds into `c`; callers clear it first.
pub(crate) fn accumulate<T: Element>(
    a: View<'_, T>,
    b: View<'_, T>,
    c: View<'_, T>,
    stats: &mut OpStats,
) {
    let n = c.size();
    for k in 0..n {
        for i in 0..n {
            let r = a.get(i, k);
            for j in 0..n {
                c.set(i, j, c.get(i, j).add(r.mul(b.get(k, j))));
            }
        }
    }
    stats.record_linear(n);
}
