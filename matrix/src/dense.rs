use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::Dimensions;
use crate::element::Element;

/// A dense matrix stored in row-major form.
///
/// The shape is fixed at construction: `values` holds exactly `rows * cols`
/// elements, with the element at `(r, c)` living at flat index
/// `r * cols + c`. Assignment and cloning copy the whole buffer; two
/// matrices never share storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenseMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    /// All values, stored in row-major order.
    pub values: Vec<T>,
}

impl<T> DenseMatrix<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// # Panics
    /// Panics if `values.len() != rows * cols`.
    #[must_use]
    pub fn from_values(values: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            values.len(),
            rows * cols,
            "buffer length does not match shape"
        );
        Self { rows, cols, values }
    }

    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// The element at `(r, c)`.
    ///
    /// Bounds are only checked in debug builds; this is the raw access path.
    /// Use [`DenseMatrix::checked_get`] when the indices are untrusted.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> &T {
        debug_assert!(r < self.rows && c < self.cols);
        &self.values[r * self.cols + c]
    }

    #[inline]
    pub fn get_mut(&mut self, r: usize, c: usize) -> &mut T {
        debug_assert!(r < self.rows && c < self.cols);
        &mut self.values[r * self.cols + c]
    }

    /// Bounds-checked companion to [`DenseMatrix::get`].
    pub fn checked_get(&self, r: usize, c: usize) -> Option<&T> {
        (r < self.rows && c < self.cols).then(|| &self.values[r * self.cols + c])
    }

    /// The k-th stored element, in storage order.
    #[inline]
    pub fn flat(&self, k: usize) -> &T {
        debug_assert!(k < self.size());
        &self.values[k]
    }

    #[inline]
    pub fn flat_mut(&mut self, k: usize) -> &mut T {
        debug_assert!(k < self.size());
        &mut self.values[k]
    }

    pub fn row_slice(&self, r: usize) -> &[T] {
        debug_assert!(r < self.rows);
        &self.values[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_slice_mut(&mut self, r: usize) -> &mut [T] {
        debug_assert!(r < self.rows);
        &mut self.values[r * self.cols..(r + 1) * self.cols]
    }

    /// A copy of row `r`.
    pub fn row(&self, r: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.row_slice(r).to_vec()
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks_exact(self.cols)
    }

    pub fn row_iter_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.values.chunks_exact_mut(self.cols)
    }

    /// Set every element to `value`, preserving the shape.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    /// Fill the elements in storage order from a producer.
    pub fn fill_with<F: FnMut() -> T>(&mut self, mut f: F) {
        for x in self.values.iter_mut() {
            *x = f();
        }
    }

    /// A new matrix of shape `(cols, rows)` with `result(c, r) = self(r, c)`.
    #[must_use]
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.size());
        for c in 0..self.cols {
            for r in 0..self.rows {
                values.push(self.values[r * self.cols + c].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }

    pub fn rand<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Self
    where
        StandardUniform: Distribution<T>,
    {
        let values = rng.sample_iter(StandardUniform).take(rows * cols).collect();
        Self { rows, cols, values }
    }
}

impl<T: Element> DenseMatrix<T> {
    /// A `rows` by `cols` matrix of zeros.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![T::zero(); rows * cols],
        }
    }

    /// True iff every element equals `T::zero()`.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|x| *x == T::zero())
    }

    /// Overwrite the elements with `0, 1, 2, ...` in storage order.
    pub fn fill_iota(&mut self) {
        let mut next = T::zero();
        for x in self.values.iter_mut() {
            *x = next.clone();
            next = next + T::one();
        }
    }
}

impl<T: Element> Default for DenseMatrix<T> {
    /// The default shape is 2 by 2, zero filled.
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl<T: fmt::Display> DenseMatrix<T> {
    /// Write row `r` to `w`, elements separated by single spaces.
    pub fn write_row<W: Write>(&self, w: &mut W, r: usize) -> fmt::Result {
        for (c, x) in self.row_slice(r).iter().enumerate() {
            if c > 0 {
                w.write_char(' ')?;
            }
            write!(w, "{x}")?;
        }
        Ok(())
    }

    /// Write column `c` to `w`, elements separated by single spaces.
    pub fn write_column<W: Write>(&self, w: &mut W, c: usize) -> fmt::Result {
        debug_assert!(c < self.cols);
        for r in 0..self.rows {
            if r > 0 {
                w.write_char(' ')?;
            }
            write!(w, "{}", self.get(r, c))?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    /// One row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            self.write_row(f, r)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}
