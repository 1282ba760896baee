//! # vecta-core
//!
//! The immutable, variable-length [`Vector`] value type.
//!
//! This crate provides:
//! - Construction from integers, floats and exact rationals, normalized to
//!   `f64` once on entry
//! - Sequence access: length, restartable iteration, negative indices, and
//!   `start:stop:step` slicing that yields a new [`Vector`]
//! - Structural equality and XOR-folded hashing
//! - Magnitude, unary plus/minus, zero-padded addition, scalar
//!   multiplication in both operand orders
//! - A truncated `Debug` preview and a tuple-style `Display`
//! - [`dispatch`], an explicit forward/reflected operator protocol over
//!   dynamically typed [`Operand`]s
//!
//! ## Immutability
//!
//! No operation writes to an existing vector. Vectors can be shared by
//! reference across threads without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dispatch;
pub mod error;
pub mod format;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use dispatch::{Operand, Outcome};
pub use error::{Result, VectorError};
pub use format::ReprConfig;
pub use vector::{Components, Key, Selection, Slice, SliceIndices, Vector};
