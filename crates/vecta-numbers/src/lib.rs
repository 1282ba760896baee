//! # vecta-numbers
//!
//! Numeric inputs accepted by Vecta vectors.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals (`Rational`)
//! - The `Number` enum every constructor and scalar input is normalized
//!   through before it reaches double precision
//!
//! ## Conversion Notes
//!
//! - Conversion to `f64` happens once, when a value enters a vector
//! - Integers and rationals too large for `f64` are rejected with
//!   [`ConversionError::Overflow`] instead of silently becoming infinite

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod number;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ConversionError;
pub use integer::Integer;
pub use number::Number;
pub use rational::Rational;
