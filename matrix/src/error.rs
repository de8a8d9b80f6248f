//! Error types for the user-facing construction path.
//!
//! Only dimension validation is recoverable. Shape mismatches in arithmetic
//! and buffer-length mismatches in [`crate::DenseMatrix::from_values`] are
//! contract violations and assert instead of returning an error.

use thiserror::Error;

/// A matrix was requested with zero rows or zero columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix dimensions must be nonzero: a matrix cannot have zero rows or columns")]
pub struct ZeroDimensionError;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn message_is_fixed() {
        assert_eq!(
            ZeroDimensionError.to_string(),
            "matrix dimensions must be nonzero: a matrix cannot have zero rows or columns"
        );
    }
}
