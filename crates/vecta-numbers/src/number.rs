//! The numeric input type accepted by vector constructors and scalars.

use dashu::integer::IBig;
use dashu::rational::RBig;
use std::fmt;

use crate::{ConversionError, Integer, Rational};

/// A numeric value before it is normalized to a double-precision component.
///
/// Every constructor input and every scalar multiplier goes through this
/// type, so integers, floats and exact rationals can be mixed freely.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// An arbitrary precision integer.
    Int(Integer),
    /// A double-precision float.
    Float(f64),
    /// An exact rational.
    Ratio(Rational),
}

impl Number {
    /// Name of the numeric kind, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Ratio(_) => "Fraction",
        }
    }

    /// Converts to the component type.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Overflow`] for integers and rationals whose
    /// magnitude exceeds the `f64` range.
    pub fn to_f64(&self) -> Result<f64, ConversionError> {
        match self {
            Self::Int(n) => n.to_f64(),
            Self::Float(x) => Ok(*x),
            Self::Ratio(r) => r.to_f64(),
        }
    }

    /// Returns the exact rational value, or `None` for NaN and infinities.
    #[must_use]
    pub fn to_exact(&self) -> Option<Rational> {
        match self {
            Self::Int(n) => Some(Rational::from_integer(n.clone())),
            Self::Float(x) => Rational::from_f64(*x),
            Self::Ratio(r) => Some(r.clone()),
        }
    }

    /// Multiplies a component by this number.
    ///
    /// Integer and float scalars multiply in double precision. Rational
    /// scalars multiply exactly and round once, so `7.0 * 1/10` is `0.7`.
    /// Results beyond the `f64` range saturate to an infinity.
    #[must_use]
    pub fn scale(&self, component: f64) -> f64 {
        match self {
            Self::Int(n) => component * n.to_f64_saturating(),
            Self::Float(x) => component * x,
            // Rationals have no signed zero; keep the IEEE sign of `-0.0 * r`.
            Self::Ratio(r) if component == 0.0 => component * r.to_f64_saturating(),
            Self::Ratio(r) => match Rational::from_f64(component) {
                Some(exact) => (&exact * r).to_f64_saturating(),
                None => component * r.to_f64_saturating(),
            },
        }
    }

    /// Adds two numbers, staying exact unless a float is involved.
    #[must_use]
    pub fn add_number(&self, other: &Number) -> Number {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a + b),
            (Self::Float(a), b) => Self::Float(a + b.to_f64_saturating()),
            (a, Self::Float(b)) => Self::Float(a.to_f64_saturating() + b),
            (a, b) => Self::exact_pair(a, b, |x, y| x + y),
        }
    }

    /// Multiplies two numbers, staying exact unless a float is involved.
    #[must_use]
    pub fn mul_number(&self, other: &Number) -> Number {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a * b),
            (Self::Float(a), b) => Self::Float(a * b.to_f64_saturating()),
            (a, Self::Float(b)) => Self::Float(a.to_f64_saturating() * b),
            (a, b) => Self::exact_pair(a, b, |x, y| x * y),
        }
    }

    /// Compares by mathematical value across kinds.
    ///
    /// `Int(2)`, `Float(2.0)` and `Ratio(2/1)` are all equal; NaN equals
    /// nothing.
    #[must_use]
    pub fn numeric_eq(&self, other: &Number) -> bool {
        if let (Self::Float(a), Self::Float(b)) = (self, other) {
            return a == b;
        }
        match (self.to_exact(), other.to_exact()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn to_f64_saturating(&self) -> f64 {
        match self {
            Self::Int(n) => n.to_f64_saturating(),
            Self::Float(x) => *x,
            Self::Ratio(r) => r.to_f64_saturating(),
        }
    }

    fn exact_pair(a: &Number, b: &Number, op: impl Fn(&Rational, &Rational) -> Rational) -> Number {
        match (a.to_exact(), b.to_exact()) {
            (Some(x), Some(y)) => Self::Ratio(op(&x, &y)),
            _ => Self::Float(f64::NAN),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Ratio(r) => write!(f, "{r}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self::Int(Integer::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        Self::Ratio(value)
    }
}

impl From<IBig> for Number {
    fn from(value: IBig) -> Self {
        Self::Int(Integer::from(value))
    }
}

impl From<RBig> for Number {
    fn from(value: RBig) -> Self {
        Self::Ratio(Rational::from(value))
    }
}

impl<T: Clone + Into<Number>> From<&T> for Number {
    fn from(value: &T) -> Self {
        value.clone().into()
    }
}
