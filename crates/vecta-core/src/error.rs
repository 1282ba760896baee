//! Errors raised by vector construction, indexing and operator dispatch.

use thiserror::Error;
use vecta_numbers::ConversionError;

/// Errors that can occur when building or querying a [`Vector`](crate::Vector).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A constructor input could not become a double-precision component.
    #[error(transparent)]
    TypeConversion(#[from] ConversionError),

    /// An integral index fell outside `[-len, len - 1]`.
    #[error("Vector index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index, before negative wrap-around.
        index: isize,
        /// Length of the indexed vector.
        len: usize,
    },

    /// An index key or operand had the wrong type.
    #[error("{message}")]
    TypeMismatch {
        /// Human readable description naming the types involved.
        message: String,
    },

    /// A slice was requested with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroSliceStep,
}

impl VectorError {
    /// The error for an index key that is neither an integer nor a slice.
    ///
    /// `owner` is the name of the type being indexed.
    #[must_use]
    pub fn bad_index(owner: &str) -> Self {
        Self::TypeMismatch {
            message: format!("{owner} indices must be integers"),
        }
    }

    /// The error for a binary operator no operand knows how to evaluate.
    #[must_use]
    pub fn unsupported_operands(op: &str, lhs: &str, rhs: &str) -> Self {
        Self::TypeMismatch {
            message: format!("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'"),
        }
    }
}

/// Convenience alias used throughout `vecta-core`.
pub type Result<T> = std::result::Result<T, VectorError>;
