//! Reference implementations of matrix arithmetic.
//!
//! These are the plain elementwise and schoolbook triple-loop versions;
//! nothing here is tuned.

use alloc::vec::Vec;

use itertools::izip;
use tracing::instrument;

use crate::dense::DenseMatrix;
use crate::element::Element;

/// Compute `A + B` elementwise.
///
/// # Panics
/// Panics if the shapes differ.
#[must_use]
pub fn add<T: Element>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    assert_eq!(a.dimensions(), b.dimensions(), "A, B dimensions don't match");
    let values = izip!(&a.values, &b.values)
        .map(|(x, y)| x.clone() + y.clone())
        .collect();
    DenseMatrix::from_values(values, a.rows, a.cols)
}

/// Compute `A - B` elementwise.
///
/// # Panics
/// Panics if the shapes differ.
#[must_use]
pub fn sub<T: Element>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    assert_eq!(a.dimensions(), b.dimensions(), "A, B dimensions don't match");
    let values = izip!(&a.values, &b.values)
        .map(|(x, y)| x.clone() - y.clone())
        .collect();
    DenseMatrix::from_values(values, a.rows, a.cols)
}

/// Compute `C = A * B`, where `C(r, c)` is the dot product of row `r` of `A`
/// and column `c` of `B`.
///
/// # Panics
/// Panics if `a.cols != b.rows`.
#[must_use]
#[instrument(level = "debug", skip_all, fields(lhs = %a.dimensions(), rhs = %b.dimensions()))]
pub fn mul<T: Element>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    assert_eq!(a.cols, b.rows, "A, B dimensions don't match");
    let mut values = Vec::with_capacity(a.rows * b.cols);
    for r in 0..a.rows {
        for c in 0..b.cols {
            let mut acc = T::zero();
            for k in 0..a.cols {
                acc = acc + a.get(r, k).clone() * b.get(k, c).clone();
            }
            values.push(acc);
        }
    }
    DenseMatrix::from_values(values, a.rows, b.cols)
}
