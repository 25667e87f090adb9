use std::cell::Cell;
use std::fmt;

use crate::element::Element;
use crate::error::{Result, StrassenError};
use crate::view::View;

/// Owned storage for one square matrix.
///
/// Holds `dimension * dimension` entries in row-major order. Cells are
/// interior-mutable so that any number of [`View`]s, including overlapping
/// ones, can read and write the same Buffer through a shared borrow. The
/// borrow checker keeps the Buffer alive for as long as any View into it.
pub struct Buffer<T: Element = i32> {
    dimension: usize,
    storage: Vec<Cell<T>>,
}

impl<T: Element> Buffer<T> {
    /// Create a zero-filled `dimension x dimension` buffer.
    pub fn new(dimension: usize) -> Self {
        Buffer {
            dimension,
            storage: vec![Cell::new(T::ZERO); dimension * dimension],
        }
    }

    /// Create a buffer from row-major data.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `data.len() != dimension * dimension`.
    pub fn from_vec(dimension: usize, data: Vec<T>) -> Result<Self> {
        let expected = dimension * dimension;
        if data.len() != expected {
            return Err(StrassenError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Buffer {
            dimension,
            storage: data.into_iter().map(Cell::new).collect(),
        })
    }

    /// Create a buffer from a list of rows.
    ///
    /// # Errors
    /// Returns `NotSquare` if any row length differs from the number of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.len();
        let mut data = Vec::with_capacity(dimension * dimension);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dimension {
                return Err(StrassenError::NotSquare {
                    row,
                    len: values.len(),
                    dimension,
                });
            }
            data.extend_from_slice(values);
        }
        Self::from_vec(dimension, data)
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let buffer = Self::new(n);
        for i in 0..n {
            buffer.storage[i * n + i].set(T::ONE);
        }
        buffer
    }

    /// Side length of the matrix.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of entries (`dimension²`).
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Bounds-checked read of the entry at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index(row, col).map(|i| self.storage[i].get())
    }

    /// Bounds-checked write of the entry at (`row`, `col`).
    ///
    /// # Errors
    /// Returns `IndexOutOfBounds` if the cell lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let dimension = self.dimension;
        let i = self
            .index(row, col)
            .ok_or(StrassenError::IndexOutOfBounds {
                row,
                col,
                dimension,
            })?;
        self.storage[i].set(value);
        Ok(())
    }

    /// A View covering the whole matrix.
    pub fn view(&self) -> View<'_, T> {
        View::new(self, 0, 0, self.dimension)
    }

    /// A View of side `size` anchored at (`row`, `col`). The window may
    /// extend past the matrix; cells outside read as zero.
    pub fn window(&self, row: usize, col: usize, size: usize) -> View<'_, T> {
        View::new(self, row, col, size)
    }

    /// Copy of the entries in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.iter().map(Cell::get).collect()
    }

    /// The main diagonal, top-left to bottom-right.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.dimension)
            .map(|i| self.storage[i * self.dimension + i].get())
            .collect()
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<&Cell<T>> {
        self.index(row, col).map(|i| &self.storage[i])
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.dimension && col < self.dimension {
            Some(row * self.dimension + col)
        } else {
            None
        }
    }
}

impl<T: Element> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Buffer {
            dimension: self.dimension,
            storage: self.storage.clone(),
        }
    }
}

impl<T: Element> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self
                .storage
                .iter()
                .zip(other.storage.iter())
                .all(|(a, b)| a.get() == b.get())
    }
}

impl<T: Element> Eq for Buffer<T> {}

impl<T: Element> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("dimension", &self.dimension)
            .field("storage", &self.to_vec())
            .finish()
    }
}

impl<T: Element> fmt::Display for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.storage[row * self.dimension + col].get())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
