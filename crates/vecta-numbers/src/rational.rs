//! Exact rational numbers.
//!
//! Rationals are the exact scalar type of Vecta: a vector scaled by a
//! rational is multiplied exactly and rounded once.

use dashu::base::{BitTest, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

use crate::integer::EXACT_F64_BITS;
use crate::{ConversionError, Integer};

/// An exact rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        if negative { Self(-value) } else { Self(value) }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the exact value of a finite `f64`.
    ///
    /// Returns `None` for NaN and the infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        #[allow(clippy::cast_possible_wrap)]
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);

        // Subnormals have no implicit leading bit and a fixed exponent.
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        let mut numerator = IBig::from(mantissa);
        if negative {
            numerator = -numerator;
        }
        let value = if exponent >= 0 {
            RBig::from(numerator << exponent.unsigned_abs() as usize)
        } else {
            RBig::from_parts(numerator, UBig::ONE << exponent.unsigned_abs() as usize)
        };
        Some(Self(value))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
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
            Err(ConversionError::Overflow {
                type_name: "Fraction",
            })
        }
    }

    /// Converts to the nearest `f64`, saturating to an infinity on overflow.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64_saturating(&self) -> f64 {
        let numerator = self.0.numerator();
        let denominator = self.0.denominator();
        // Both parts exact in f64: one IEEE division is correctly rounded.
        if numerator.bit_len() <= EXACT_F64_BITS && denominator.bit_len() <= EXACT_F64_BITS {
            let n: Option<i64> = numerator.clone().try_into().ok();
            let d: Option<u64> = denominator.clone().try_into().ok();
            if let (Some(n), Some(d)) = (n, d) {
                return n as f64 / d as f64;
            }
        }
        self.0.to_f64().value()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<RBig> for Rational {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = &a + &b;
        assert_eq!(sum.numerator().to_i64(), Some(5));
        assert_eq!(sum.denominator().to_i64(), Some(6));

        // 1/2 * 1/3 = 1/6
        let prod = &a * &b;
        assert_eq!(prod.numerator().to_i64(), Some(1));
        assert_eq!(prod.denominator().to_i64(), Some(6));

        assert_eq!(a.clone() + b.clone(), sum);
        assert_eq!(a * b, prod);
    }

    #[test]
    fn test_identities() {
        let third = Rational::from_i64(1, 3);
        assert_eq!(third.clone() + Rational::zero(), third);
        assert_eq!(third.clone() * Rational::one(), third);
        assert!(Rational::from_i64(5, 5).is_one());
    }

    #[test]
    fn test_reduction() {
        // 4/6 should reduce to 2/3
        let r = Rational::from_i64(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_negative_denominator() {
        let r = Rational::from_i64(1, -4);
        assert!(r.is_negative());
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(4));
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_zero_denominator() {
        let _ = Rational::from_i64(1, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
    }

    #[test]
    fn test_to_f64_correctly_rounded() {
        assert_eq!(Rational::from_i64(7, 10).to_f64(), Ok(0.7));
        assert_eq!(Rational::from_i64(1, 4).to_f64(), Ok(0.25));
        assert_eq!(Rational::from_i64(-3, 2).to_f64(), Ok(-1.5));
    }

    #[test]
    fn test_from_f64_exact() {
        let half = Rational::from_f64(0.5).unwrap();
        assert_eq!(half, Rational::from_i64(1, 2));

        let big = Rational::from_f64(1e20).unwrap();
        assert!(big.is_integer());

        // 0.1 is not 1/10 in binary
        let tenth = Rational::from_f64(0.1).unwrap();
        assert_ne!(tenth, Rational::from_i64(1, 10));
        assert_eq!(tenth.to_f64(), Ok(0.1));
    }

    #[test]
    fn test_from_f64_special_values() {
        assert!(Rational::from_f64(f64::NAN).is_none());
        assert!(Rational::from_f64(f64::INFINITY).is_none());
        assert_eq!(Rational::from_f64(-0.0), Some(Rational::zero()));

        let tiny = Rational::from_f64(f64::MIN_POSITIVE / 4.0).unwrap();
        assert!(!tiny.is_zero());
        assert!(!tiny.is_integer());
    }

    #[test]
    fn test_overflowing_to_f64() {
        let huge = Integer::from_str_radix(&"9".repeat(400), 10).unwrap();
        let r = Rational::from_integer(huge);
        assert_eq!(
            r.to_f64(),
            Err(ConversionError::Overflow {
                type_name: "Fraction"
            })
        );
    }
}
