use log::debug;

use crate::buffer::Buffer;
use crate::config::StrassenConfig;
use crate::element::Element;
use crate::error::Result;
use crate::padding::padded_dimension;
use crate::stats::OpStats;
use crate::view::View;

use super::linear::accumulate;
use super::{check_operands, Multiplier};

/// Strassen's divide-and-conquer multiplier.
///
/// Operands are embedded in buffers of the padded dimension (see
/// [`padded_dimension`]) so that every recursion level splits evenly. All
/// intermediate sums and products live in a single scratch buffer of the
/// same side, carved into quadrants at each level: one holds the current
/// sub-product, one is handed down as the next level's scratch, and two hold
/// operand sums. Reuse is nested by call depth only, so no level ever reads
/// a slot that a sibling call could overwrite.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrassenMultiplier {
    config: StrassenConfig,
}

impl StrassenMultiplier {
    pub fn new(config: StrassenConfig) -> Self {
        StrassenMultiplier { config }
    }

    pub fn config(&self) -> &StrassenConfig {
        &self.config
    }
}

impl<T: Element> Multiplier<T> for StrassenMultiplier {
    fn name(&self) -> &str {
        "strassen"
    }

    fn multiply_with_stats(
        &self,
        a: View<'_, T>,
        b: View<'_, T>,
        stats: &mut OpStats,
    ) -> Result<Buffer<T>> {
        let n = check_operands(a, b)?;
        let cutoff = self.config.cutoff();
        let padded = padded_dimension(n, cutoff);
        debug!(
            "strassen: n={}, padded={}, cutoff={}, dtype={}, scratch={} elements",
            n,
            padded,
            cutoff,
            T::NAME,
            padded * padded
        );

        let c = Buffer::new(padded);
        let scratch = Buffer::new(padded);
        stats.record_allocation(2 * padded * padded);

        let mut recursion = Recursion { cutoff, stats };
        if padded == n {
            // Every split is exact, so the operands can be read in place.
            recursion.multiply(a, b, c.view(), scratch.view());
            return Ok(c);
        }

        let a_padded = embed(a, padded);
        let b_padded = embed(b, padded);
        recursion.stats.record_allocation(2 * padded * padded);
        recursion.multiply(a_padded.view(), b_padded.view(), c.view(), scratch.view());

        recursion.stats.record_allocation(n * n);
        Ok(c.window(0, 0, n).to_buffer())
    }
}

/// Copy `src` into the top-left corner of a zeroed `padded x padded` buffer.
fn embed<T: Element>(src: View<'_, T>, padded: usize) -> Buffer<T> {
    let out = Buffer::new(padded);
    out.window(0, 0, src.size()).copy_from(src);
    out
}

struct Recursion<'s> {
    cutoff: usize,
    stats: &'s mut OpStats,
}

impl Recursion<'_> {
    /// `c = a x b`, using `s` (same side as `c`) as scratch.
    fn multiply<T: Element>(
        &mut self,
        a: View<'_, T>,
        b: View<'_, T>,
        c: View<'_, T>,
        s: View<'_, T>,
    ) {
        let n = c.size();
        c.clear();

        if n % 2 == 1 || n <= self.cutoff {
            accumulate(a, b, c, self.stats);
            return;
        }

        let [a00, a01, a10, a11] = a.quadrants();
        let [b00, b01, b10, b11] = b.quadrants();
        let [c00, c01, c10, c11] = c.quadrants();

        // Product slot, scratch for the next level, and two operand sums.
        let [m, sr, sum0, sum1] = s.quadrants();

        // M1 = (A00 + A11)(B00 + B11)
        self.add(a00, a11, sum0);
        self.add(b00, b11, sum1);
        self.multiply(sum0, sum1, m, sr);
        self.add(c00, m, c00);
        self.add(c11, m, c11);

        // M2 = (A10 + A11) B00
        self.add(a10, a11, sum0);
        self.multiply(sum0, b00, m, sr);
        self.add(c10, m, c10);
        self.sub(c11, m, c11);

        // M3 = A00 (B01 - B11)
        self.sub(b01, b11, sum1);
        self.multiply(a00, sum1, m, sr);
        self.add(c01, m, c01);
        self.add(c11, m, c11);

        // M4 = A11 (B10 - B00)
        self.sub(b10, b00, sum1);
        self.multiply(a11, sum1, m, sr);
        self.add(c00, m, c00);
        self.add(c10, m, c10);

        // M5 = (A00 + A01) B11
        self.add(a00, a01, sum0);
        self.multiply(sum0, b11, m, sr);
        self.sub(c00, m, c00);
        self.add(c01, m, c01);

        // M6 = (A10 - A00)(B00 + B01)
        self.sub(a10, a00, sum0);
        self.add(b00, b01, sum1);
        self.multiply(sum0, sum1, m, sr);
        self.add(c11, m, c11);

        // M7 = (A01 - A11)(B10 + B11)
        self.sub(a01, a11, sum0);
        self.add(b10, b11, sum1);
        self.multiply(sum0, sum1, m, sr);
        self.add(c00, m, c00);
    }

    /// `c = a + b` over `c`'s side. Overwrites every cell of `c`, so `c` may
    /// hold stale scratch or alias `a`.
    fn add<T: Element>(&mut self, a: View<'_, T>, b: View<'_, T>, c: View<'_, T>) {
        let n = c.size();
        for x in 0..n {
            for y in 0..n {
                c.set(x, y, a.get(x, y).add(b.get(x, y)));
            }
        }
        self.stats.record_elementwise(n);
    }

    /// `c = a - b` over `c`'s side, with the same overwrite contract as `add`.
    fn sub<T: Element>(&mut self, a: View<'_, T>, b: View<'_, T>, c: View<'_, T>) {
        let n = c.size();
        for x in 0..n {
            for y in 0..n {
                c.set(x, y, a.get(x, y).sub(b.get(x, y)));
            }
        }
        self.stats.record_elementwise(n);
    }
}
