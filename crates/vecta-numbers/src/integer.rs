//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! operations needed to feed integers into vector components.

use dashu::base::{BitTest, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

use crate::ConversionError;

/// Largest bit length whose integers are exactly representable in an `f64`.
pub(crate) const EXACT_F64_BITS: usize = f64::MANTISSA_DIGITS as usize;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Converts to the nearest `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Overflow`] if the magnitude exceeds `f64::MAX`.
    pub fn to_f64(&self) -> Result<f64, ConversionError> {
        let value = self.to_f64_saturating();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConversionError::Overflow { type_name: "int" })
        }
    }

    /// Converts to the nearest `f64`, saturating to an infinity on overflow.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64_saturating(&self) -> f64 {
        if self.bit_len() <= EXACT_F64_BITS {
            if let Some(small) = self.to_i64() {
                return small as f64;
            }
        }
        self.0.to_f64().value()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Integer {
                fn from(value: $ty) -> Self {
                    Self(IBig::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((&a + &b).to_i64(), Some(13));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((a.clone() + &b).to_i64(), Some(13));
        assert_eq!((a * b).to_i64(), Some(30));
    }

    #[test]
    fn test_identities() {
        let seven = Integer::new(7);
        assert_eq!(seven.clone() + Integer::zero(), seven);
        assert_eq!(seven.clone() * Integer::one(), seven);
        assert!(Integer::zero().is_zero());
        assert!(Integer::one().is_one());
    }

    #[test]
    fn test_small_to_f64() {
        assert_eq!(Integer::new(42).to_f64(), Ok(42.0));
        assert_eq!(Integer::new(-7).to_f64(), Ok(-7.0));
        assert_eq!(Integer::zero().to_f64(), Ok(0.0));
    }

    #[test]
    fn test_large_to_f64() {
        // 2^64 is outside i64 but well inside f64
        let a = Integer::from(u128::from(u64::MAX) + 1);
        assert_eq!(a.to_f64(), Ok(18_446_744_073_709_551_616.0));
    }

    #[test]
    fn test_overflowing_to_f64() {
        let digits = "1".repeat(400);
        let huge = Integer::from_str_radix(&digits, 10).unwrap();
        assert_eq!(
            huge.to_f64(),
            Err(ConversionError::Overflow { type_name: "int" })
        );
        assert_eq!(huge.to_f64_saturating(), f64::INFINITY);
        let negative = Integer::from_str_radix(&format!("-{digits}"), 10).unwrap();
        assert_eq!(negative.to_f64_saturating(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_large_numbers() {
        let a = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let b = Integer::from_str_radix("987654321098765432109876543210", 10).unwrap();
        let sum = &a + &b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
        assert!(sum.to_i64().is_none());
    }
}
