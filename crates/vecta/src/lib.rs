//! # Vecta
//!
//! An immutable, variable-length vector of `f64` components.
//!
//! Vectors are built once from integers, floats or exact rationals and never
//! change afterwards. They behave as sequences (length, iteration, negative
//! indices, slicing) and support magnitude, negation, zero-padded addition
//! and scalar multiplication from either side.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecta::prelude::*;
//!
//! let v1 = Vector::try_new([9, 8, 7, 6]).unwrap();
//! let v3 = Vector::try_new([11, 22]).unwrap();
//!
//! let sum = &v1 + &v3;
//! let scaled = sum * Rational::from_i64(1, 10);
//! assert_eq!(scaled.to_string(), "(2.0, 3.0, 0.7, 0.6)");
//! assert_eq!(format!("{:?}", v1.slice(1..3).unwrap()), "Vector([8.0, 7.0])");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use vecta_core as core;
pub use vecta_numbers as numbers;

pub use vecta_core::dispatch;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vecta_core::{Key, Operand, Outcome, ReprConfig, Selection, Slice, Vector, VectorError};
    pub use vecta_numbers::{ConversionError, Integer, Number, Rational};
}
