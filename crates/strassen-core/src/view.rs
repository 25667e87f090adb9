use std::fmt;

use crate::buffer::Buffer;
use crate::element::Element;

/// A square, non-owning window into a [`Buffer`].
///
/// Local cell `(x, y)` maps to buffer cell `(row + x, col + y)`. Cells that
/// fall outside either the window's own side or the buffer's bounds read as
/// zero and silently drop writes; this is how padding is realized without
/// zero-extending every sub-problem. Views are `Copy` and may alias and
/// overlap one another freely.
#[derive(Clone, Copy)]
pub struct View<'a, T: Element> {
    buffer: &'a Buffer<T>,
    row: usize,
    col: usize,
    size: usize,
}

impl<'a, T: Element> View<'a, T> {
    pub(crate) fn new(buffer: &'a Buffer<T>, row: usize, col: usize, size: usize) -> Self {
        View {
            buffer,
            row,
            col,
            size,
        }
    }

    /// Side length of the window.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Buffer coordinates of the window's top-left cell.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Read local cell (`x`, `y`), or zero if it is not addressable.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        if x >= self.size || y >= self.size {
            return T::ZERO;
        }
        self.buffer
            .cell(self.row + x, self.col + y)
            .map_or(T::ZERO, |c| c.get())
    }

    /// Write local cell (`x`, `y`); a no-op if it is not addressable.
    #[inline]
    pub fn set(&self, x: usize, y: usize, value: T) {
        if x >= self.size || y >= self.size {
            return;
        }
        if let Some(c) = self.buffer.cell(self.row + x, self.col + y) {
            c.set(value);
        }
    }

    /// Quadrant (`qx`, `qy`) with `qx, qy` in `{0, 1}`.
    ///
    /// The child side is `ceil(size / 2)`, so for an odd parent the bottom
    /// and right quadrants reach one cell past the parent; those cells read
    /// as zero through the parent's buffer bounds.
    pub fn sub(&self, qx: usize, qy: usize) -> View<'a, T> {
        debug_assert!(qx < 2 && qy < 2, "quadrant ({qx}, {qy}) out of range");
        let half = self.size.div_ceil(2);
        View {
            buffer: self.buffer,
            row: self.row + qx * half,
            col: self.col + qy * half,
            size: half,
        }
    }

    /// All four quadrants, ordered `[00, 01, 10, 11]`.
    pub fn quadrants(&self) -> [View<'a, T>; 4] {
        [self.sub(0, 0), self.sub(0, 1), self.sub(1, 0), self.sub(1, 1)]
    }

    /// Zero every addressable cell.
    pub fn clear(&self) {
        for x in 0..self.size {
            for y in 0..self.size {
                self.set(x, y, T::ZERO);
            }
        }
    }

    /// Overwrite every addressable cell with the matching cell of `src`.
    pub fn copy_from(&self, src: View<'_, T>) {
        for x in 0..self.size {
            for y in 0..self.size {
                self.set(x, y, src.get(x, y));
            }
        }
    }

    /// Materialize the window into a new `size x size` buffer.
    pub fn to_buffer(&self) -> Buffer<T> {
        let out = Buffer::new(self.size);
        out.view().copy_from(*self);
        out
    }
}

impl<T: Element> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("size", &self.size)
            .field("buffer_dimension", &self.buffer.dimension())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(n: usize) -> Buffer {
        Buffer::from_vec(n, (0..(n * n) as i32).collect()).unwrap()
    }

    #[test]
    fn test_full_view_reads_buffer() {
        let b = counting(3);
        let v = b.view();
        assert_eq!(v.size(), 3);
        assert_eq!(v.get(1, 2), 5);
    }

    #[test]
    fn test_quadrants_even() {
        let b = counting(4);
        let v = b.view();
        assert_eq!(v.sub(0, 0).origin(), (0, 0));
        assert_eq!(v.sub(0, 1).origin(), (0, 2));
        assert_eq!(v.sub(1, 0).origin(), (2, 0));
        assert_eq!(v.sub(1, 1).get(0, 0), 10);
        assert_eq!(v.sub(1, 1).size(), 2);
    }

    #[test]
    fn test_quadrants_odd_use_ceiling() {
        let b = counting(3);
        let q = b.view().sub(1, 1);
        assert_eq!(q.size(), 2);
        assert_eq!(q.origin(), (2, 2));
        assert_eq!(q.get(0, 0), 8);
        // Past the buffer edge.
        assert_eq!(q.get(1, 0), 0);
        assert_eq!(q.get(0, 1), 0);
    }

    #[test]
    fn test_quadrants_order() {
        let b = counting(4);
        let [q00, q01, q10, q11] = b.view().quadrants();
        assert_eq!(q00.get(0, 0), 0);
        assert_eq!(q01.get(0, 0), 2);
        assert_eq!(q10.get(0, 0), 8);
        assert_eq!(q11.get(0, 0), 10);
    }

    #[test]
    fn test_out_of_range_writes_are_discarded() {
        let b: Buffer = Buffer::new(2);
        let q = b.view().sub(1, 1);
        q.set(0, 0, 7);
        q.set(5, 5, 9);
        b.view().set(2, 0, 9);
        assert_eq!(b.to_vec(), vec![0, 0, 0, 7]);
    }

    #[test]
    fn test_window_clips_to_own_size() {
        let b = counting(4);
        let w = b.window(0, 0, 2);
        assert_eq!(w.get(1, 1), 5);
        assert_eq!(w.get(2, 2), 0);
        w.set(2, 2, 99);
        assert_eq!(b.get(2, 2), Some(10));
    }

    #[test]
    fn test_aliasing_views_share_cells() {
        let b: Buffer = Buffer::new(4);
        let whole = b.view();
        let quadrant = whole.sub(0, 1);
        quadrant.set(1, 1, 42);
        assert_eq!(whole.get(1, 3), 42);
        whole.set(0, 2, 3);
        assert_eq!(quadrant.get(0, 0), 3);
    }

    #[test]
    fn test_clear_only_touches_window() {
        let b = counting(4);
        b.view().sub(1, 0).clear();
        assert_eq!(b.get(2, 0), Some(0));
        assert_eq!(b.get(3, 1), Some(0));
        assert_eq!(b.get(2, 2), Some(10));
        assert_eq!(b.get(0, 0), Some(0));
        assert_eq!(b.get(1, 1), Some(5));
    }

    #[test]
    fn test_copy_from_and_to_buffer() {
        let src = counting(2);
        let dst: Buffer = Buffer::new(4);
        dst.view().copy_from(src.view());
        assert_eq!(dst.get(1, 1), Some(3));
        assert_eq!(dst.get(3, 3), Some(0));
        let back = dst.window(0, 0, 2).to_buffer();
        assert_eq!(back, src);
    }
}
