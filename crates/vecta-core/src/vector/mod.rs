//! Immutable variable-length vector of double-precision components.
//!
//! A [`Vector`] is built once from integers, floats or exact rationals, all
//! normalized to `f64` on entry. Every operation returns a new vector; the
//! stored components never change after construction.

mod display;
mod indexing;
mod ops;

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use vecta_numbers::Number;

use crate::error::Result;

pub use indexing::{Key, Selection, Slice, SliceIndices};

/// Iterator over the components of a [`Vector`], in storage order.
pub type Components<'a> = std::iter::Copied<std::slice::Iter<'a, f64>>;

/// An immutable sequence of `f64` components.
///
/// Equality is structural: two vectors are equal when they have the same
/// length and pairwise-equal components. Hashing XOR-combines the hash of
/// every component, so equal vectors always hash equal.
///
/// Like `f64` itself, a vector holding NaN is not equal to itself.
#[derive(Clone, Default)]
pub struct Vector {
    components: Box<[f64]>,
}

impl Vector {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// The vector with no components.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a vector from any mix of numeric values.
    ///
    /// Each value is converted to `f64` exactly once, here.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeConversion`](crate::VectorError::TypeConversion)
    /// if an integer or rational lies outside the `f64` range.
    pub fn try_new<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        let components = values
            .into_iter()
            .map(|value| value.into().to_f64())
            .collect::<std::result::Result<Vec<f64>, _>>()?;
        Ok(Self::from(components))
    }

    // ------------------------------------------------------------------
    // Sequence protocol
    // ------------------------------------------------------------------

    /// Number of components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the vector has no components.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over the components. Each call starts from the beginning.
    #[inline]
    pub fn iter(&self) -> Components<'_> {
        self.components.iter().copied()
    }

    /// The components as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Copies the components into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.components.to_vec()
    }

    // ------------------------------------------------------------------
    // Magnitude
    // ------------------------------------------------------------------

    /// Euclidean norm: the square root of the sum of squared components.
    ///
    /// The empty vector has magnitude `0.0`. If the plain sum of squares
    /// overflows while every component is finite, the sum is recomputed on
    /// components scaled by the largest magnitude.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        let sum_of_squares = self.iter().fold(0.0, |acc, x| acc + x * x);
        if !sum_of_squares.is_infinite() {
            return sum_of_squares.sqrt();
        }
        let largest = self.iter().map(f64::abs).fold(0.0, f64::max);
        if largest.is_infinite() {
            return f64::INFINITY;
        }
        let scaled = self
            .iter()
            .map(|x| x / largest)
            .fold(0.0, |acc, x| acc + x * x);
        largest * scaled.sqrt()
    }

    /// Alias for [`Vector::magnitude`].
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /// True iff the magnitude is not zero. This is the vector's truthiness.
    #[must_use]
    pub fn is_nonzero(&self) -> bool {
        self.magnitude() != 0.0
    }

    // ------------------------------------------------------------------
    // Unary plus
    // ------------------------------------------------------------------

    /// Returns an equal vector backed by fresh storage.
    #[must_use]
    pub fn pos(&self) -> Self {
        Self {
            components: self.components.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Hashing
    // ------------------------------------------------------------------

    /// XOR of the hashes of all components, starting from zero.
    ///
    /// Distinct vectors may collide (`[1.0, 1.0]` and `[]` both fold to 0).
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        self.iter().map(component_hash).fold(0, |acc, h| acc ^ h)
    }
}

/// Hash of one component. `-0.0` hashes like `0.0` because they compare equal.
fn component_hash(value: f64) -> u64 {
    let canonical = if value == 0.0 { 0.0_f64 } else { value };
    let mut hasher = FxHasher::default();
    canonical.to_bits().hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

// ======================================================================
// Conversions
// ======================================================================

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self {
            components: components.into_boxed_slice(),
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self {
            components: components.into(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::from(components.as_slice())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<f64>>().into()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = Components<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
