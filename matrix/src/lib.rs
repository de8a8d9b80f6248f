//! A dense row-major matrix container over a generic element type.

#![no_std]

extern crate alloc;

use core::fmt;

pub mod arith;
pub mod dense;
pub mod element;
pub mod error;

pub use dense::DenseMatrix;
pub use element::Element;
pub use error::ZeroDimensionError;

/// The shape of a matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
