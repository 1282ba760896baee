//! Conversion errors for numeric inputs.

use thiserror::Error;

/// Errors raised when a value cannot become a double-precision component.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value is finite but outside the range of `f64`.
    #[error("{type_name} too large to convert to float")]
    Overflow {
        /// Name of the offending numeric type.
        type_name: &'static str,
    },

    /// The value is not numeric at all.
    #[error("must be real number, not {type_name}")]
    NotNumeric {
        /// Name of the offending type.
        type_name: &'static str,
    },
}

impl ConversionError {
    /// Name of the type that failed to convert.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Overflow { type_name } | Self::NotNumeric { type_name } => type_name,
        }
    }
}
