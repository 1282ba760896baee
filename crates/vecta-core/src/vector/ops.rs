//! Arithmetic operators for [`Vector`].
//!
//! Implements:
//! - `Vector + Vector` (element-wise, the shorter operand padded with zeros)
//! - `Vector` plus a slice, `Vec<f64>` or array, in either order (same padding rule)
//! - `Vector * scalar` and `scalar * Vector` for every numeric input type
//! - `Neg`
//!
//! Every operator allocates a new vector; none can fail.

use std::ops::{Add, Mul, Neg};

use itertools::Itertools;
use vecta_numbers::{Integer, Number, Rational};

use crate::error::Result;

use super::Vector;

/// Position-wise sum, treating missing components of the shorter side as zero.
fn padded_sum(lhs: &[f64], rhs: &[f64]) -> Vector {
    lhs.iter()
        .copied()
        .zip_longest(rhs.iter().copied())
        .map(|pair| {
            let (a, b) = pair.or(0.0, 0.0);
            a + b
        })
        .collect()
}

impl Vector {
    /// Multiplies every component by `scalar`.
    ///
    /// Results beyond the `f64` range saturate to an infinity.
    #[must_use]
    pub fn scaled_by(&self, scalar: &Number) -> Vector {
        self.iter().map(|x| scalar.scale(x)).collect()
    }

    /// Multiplies every component by `scalar`, rejecting scalars that have
    /// no `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeConversion`](crate::VectorError::TypeConversion)
    /// if `scalar` is an integer or rational outside the `f64` range.
    pub fn scale(&self, scalar: impl Into<Number>) -> Result<Vector> {
        let scalar = scalar.into();
        scalar.to_f64()?;
        Ok(self.scaled_by(&scalar))
    }
}

// ======================================================================
// Vector + Vector
// ======================================================================

macro_rules! impl_vector_add {
    ($lhs:ty, $rhs:ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Vector;

            fn add(self, rhs: $rhs) -> Vector {
                padded_sum(self.as_slice(), rhs.as_slice())
            }
        }
    };
}

impl_vector_add!(Vector, Vector);
impl_vector_add!(Vector, &Vector);
impl_vector_add!(&Vector, Vector);
impl_vector_add!(&Vector, &Vector);

// ======================================================================
// Vector + plain sequence, both orders
// ======================================================================

impl Add<&[f64]> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &[f64]) -> Vector {
        padded_sum(self.as_slice(), rhs)
    }
}

impl Add<&[f64]> for Vector {
    type Output = Vector;

    fn add(self, rhs: &[f64]) -> Vector {
        &self + rhs
    }
}

impl Add<&Vector> for &[f64] {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        rhs + self
    }
}

impl Add<Vector> for &[f64] {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &rhs + self
    }
}

impl Add<Vec<f64>> for &Vector {
    type Output = Vector;

    fn add(self, rhs: Vec<f64>) -> Vector {
        self + rhs.as_slice()
    }
}

impl Add<Vec<f64>> for Vector {
    type Output = Vector;

    fn add(self, rhs: Vec<f64>) -> Vector {
        &self + rhs.as_slice()
    }
}

impl Add<&Vector> for Vec<f64> {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        rhs + self.as_slice()
    }
}

impl Add<Vector> for Vec<f64> {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &rhs + self.as_slice()
    }
}

impl<const N: usize> Add<[f64; N]> for &Vector {
    type Output = Vector;

    fn add(self, rhs: [f64; N]) -> Vector {
        self + rhs.as_slice()
    }
}

impl<const N: usize> Add<[f64; N]> for Vector {
    type Output = Vector;

    fn add(self, rhs: [f64; N]) -> Vector {
        &self + rhs.as_slice()
    }
}

impl<const N: usize> Add<&Vector> for [f64; N] {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        rhs + self.as_slice()
    }
}

impl<const N: usize> Add<Vector> for [f64; N] {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &rhs + self.as_slice()
    }
}

// ======================================================================
// Negation
// ======================================================================

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.iter().map(|x| -x).collect()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

// ======================================================================
// Scalar multiplication, both orders
// ======================================================================

macro_rules! impl_scalar_mul {
    ($($ty:ty),*) => {
        $(
            impl Mul<$ty> for &Vector {
                type Output = Vector;

                fn mul(self, scalar: $ty) -> Vector {
                    self.scaled_by(&Number::from(scalar))
                }
            }

            impl Mul<$ty> for Vector {
                type Output = Vector;

                fn mul(self, scalar: $ty) -> Vector {
                    &self * scalar
                }
            }

            impl Mul<&Vector> for $ty {
                type Output = Vector;

                fn mul(self, vector: &Vector) -> Vector {
                    vector * self
                }
            }

            impl Mul<Vector> for $ty {
                type Output = Vector;

                fn mul(self, vector: Vector) -> Vector {
                    &vector * self
                }
            }
        )*
    };
}

impl_scalar_mul!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Integer, Rational,
    Number
);

macro_rules! impl_borrowed_scalar_mul {
    ($($ty:ty),*) => {
        $(
            impl Mul<&$ty> for &Vector {
                type Output = Vector;

                fn mul(self, scalar: &$ty) -> Vector {
                    self.scaled_by(&Number::from(scalar))
                }
            }

            impl Mul<&Vector> for &$ty {
                type Output = Vector;

                fn mul(self, vector: &Vector) -> Vector {
                    vector * self
                }
            }
        )*
    };
}

impl_borrowed_scalar_mul!(Integer, Rational);

impl Mul<&Number> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: &Number) -> Vector {
        self.scaled_by(scalar)
    }
}

impl Mul<&Vector> for &Number {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.scaled_by(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::VectorError;
    use vecta_numbers::ConversionError;

    #[test]
    fn test_add_equal_lengths() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([10.0, 20.0, 30.0]);
        assert_eq!((&a + &b).as_slice(), &[11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_add_pads_shorter_operand() {
        let long = Vector::from([1.0, 2.0, 3.0, 4.0]);
        let short = Vector::from([10.0, 20.0]);
        let expected = Vector::from([11.0, 22.0, 3.0, 4.0]);
        assert_eq!(&long + &short, expected);
        assert_eq!(short + long, expected);
    }

    #[test]
    fn test_add_empty_is_identity() {
        let v = Vector::from([1.0, -2.0]);
        assert_eq!(&v + &Vector::empty(), v);
        assert_eq!(Vector::empty() + &v, v);
    }

    #[test]
    fn test_add_plain_sequences_both_orders() {
        let v = Vector::from([1.0, 1.0]);
        let pair = [1.0, 2.0];
        assert_eq!(&v + pair, Vector::from([2.0, 3.0]));
        assert_eq!(pair + &v, Vector::from([2.0, 3.0]));

        let longer: &[f64] = &[1.0, 1.0, 5.0];
        assert_eq!(longer + &v, Vector::from([2.0, 2.0, 5.0]));
        assert_eq!(longer + v.clone(), Vector::from([2.0, 2.0, 5.0]));
    }

    #[test]
    fn test_add_vec_both_orders() {
        let v = Vector::from([1.0, 1.0]);
        assert_eq!(&v + vec![1.0], Vector::from([2.0, 1.0]));
        assert_eq!(v.clone() + vec![1.0, 2.0, 3.0], Vector::from([2.0, 3.0, 3.0]));
        assert_eq!(vec![5.0] + &v, Vector::from([6.0, 1.0]));
        assert_eq!(Vec::<f64>::new() + v.clone(), v);
    }

    #[test]
    fn test_neg() {
        let v = Vector::from([1.0, -2.0]);
        assert_eq!(-&v, Vector::from([-1.0, 2.0]));
        assert_eq!(-(-v.clone()), v);
        assert!((-Vector::empty()).is_empty());
    }

    #[test]
    fn test_mul_scalar_both_orders() {
        let v = Vector::from([1.0, 2.0]);
        assert_eq!(&v * 3_i32, Vector::from([3.0, 6.0]));
        assert_eq!(3_i32 * &v, Vector::from([3.0, 6.0]));
        assert_eq!(&v * 0.5_f64, Vector::from([0.5, 1.0]));
        assert_eq!(0.5_f32 * v.clone(), Vector::from([0.5, 1.0]));
    }

    #[test]
    fn test_mul_rational_is_exact() {
        let v = Vector::from([20.0, 30.0, 7.0, 6.0]);
        let tenth = Rational::from_i64(1, 10);
        let expected = Vector::from([2.0, 3.0, 0.7, 0.6]);
        assert_eq!(&v * &tenth, expected);
        assert_eq!(&tenth * &v, expected);
        assert_eq!(tenth * v, expected);
    }

    #[test]
    fn test_mul_rational_keeps_negative_zero() {
        let v = Vector::from([-0.0, 3.0]);
        let scaled = &v * Rational::from_i64(1, 2);
        assert_eq!(scaled.to_string(), "(-0.0, 1.5)");
    }

    #[test]
    fn test_mul_preserves_length() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!((&v * Integer::new(0)).len(), 3);
        assert_eq!((Vector::empty() * 7_i32).len(), 0);
    }

    #[test]
    fn test_scale_checked() {
        let v = Vector::from([1.0, 2.0]);
        assert_eq!(v.scale(Rational::from_i64(1, 4)).unwrap(), Vector::from([0.25, 0.5]));

        let huge = Integer::from_str_radix(&"1".repeat(400), 10).unwrap();
        assert_eq!(
            v.scale(huge.clone()).unwrap_err(),
            VectorError::TypeConversion(ConversionError::Overflow { type_name: "int" })
        );
        // The operator form saturates instead.
        assert_eq!(&v * &huge, Vector::from([f64::INFINITY, f64::INFINITY]));
    }
}
