//! Explicit operator dispatch over dynamically typed operands.
//!
//! Binary operators resolve in up to two steps:
//! 1. the left operand's forward hook;
//! 2. if that reports [`Outcome::Unsupported`], the right operand's
//!    reflected hook, tried once.
//!
//! If neither hook accepts the pair, arithmetic fails with
//! [`VectorError::TypeMismatch`] while equality falls back to `false`.
//! This is how a [`Vector`] refuses to equal a plain list with the same
//! values, yet still accepts `(1, 2) + Vector([1, 1])`.

use tracing::{debug, trace};
use vecta_numbers::{ConversionError, Number};

use crate::error::{Result, VectorError};
use crate::vector::{Key, Vector};

/// Result of an operator hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The hook handled the operand pair.
    Value(T),
    /// The hook does not know the other operand's type.
    Unsupported,
}

impl<T> Outcome<T> {
    /// Whether the hook declined.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }

    /// Maps the handled value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Value(value) => Outcome::Value(f(value)),
            Self::Unsupported => Outcome::Unsupported,
        }
    }

    /// The handled value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unsupported => None,
        }
    }
}

/// A dynamically typed value taking part in operator dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// The absent value.
    None,
    /// An integer, float or rational.
    Number(Number),
    /// A string.
    Text(String),
    /// An immutable ordered sequence.
    Tuple(Vec<Operand>),
    /// A mutable ordered sequence.
    List(Vec<Operand>),
    /// An unordered collection; iteration follows the stored order.
    Set(Vec<Operand>),
    /// A vector.
    Vector(Vector),
}

impl Operand {
    /// The operand's type name, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Number(n) => n.type_name(),
            Self::Text(_) => "str",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Vector(_) => "Vector",
        }
    }

    /// A tuple of numbers.
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        Self::Tuple(numbers(items))
    }

    /// A list of numbers.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        Self::List(numbers(items))
    }

    /// A set of numbers, kept in first-seen order.
    ///
    /// Numerically equal items (`1`, `1.0`, `2/2`) collapse to the first one.
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        let mut distinct: Vec<Operand> = Vec::new();
        for item in numbers(items) {
            if !distinct.iter().any(|seen| equals(seen, &item)) {
                distinct.push(item);
            }
        }
        Self::Set(distinct)
    }

    /// Converts a single operand to a component.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::NotNumeric`] for anything but a number, and
    /// [`ConversionError::Overflow`] for numbers outside the `f64` range.
    pub fn to_component(&self) -> std::result::Result<f64, ConversionError> {
        match self {
            Self::Number(n) => n.to_f64(),
            other => Err(ConversionError::NotNumeric {
                type_name: other.type_name(),
            }),
        }
    }

    /// Items of an iterable operand, or `None` for scalars.
    fn items(&self) -> Option<&[Operand]> {
        match self {
            Self::Tuple(items) | Self::List(items) | Self::Set(items) => Some(items),
            _ => None,
        }
    }
}

fn numbers<I, T>(items: I) -> Vec<Operand>
where
    I: IntoIterator<Item = T>,
    T: Into<Number>,
{
    items.into_iter().map(|n| Operand::Number(n.into())).collect()
}

impl From<Vector> for Operand {
    fn from(vector: Vector) -> Self {
        Self::Vector(vector)
    }
}

impl From<Number> for Operand {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<&Operand> for Key {
    /// Integers index positions; every other operand is an unsupported key.
    fn from(operand: &Operand) -> Self {
        match operand {
            Operand::Number(Number::Int(n)) => {
                let position = n.to_i64().and_then(|v| isize::try_from(v).ok());
                Key::Position(position.unwrap_or(if n.is_negative() {
                    isize::MIN
                } else {
                    isize::MAX
                }))
            }
            other => Key::Unsupported(other.type_name()),
        }
    }
}

// ======================================================================
// Vector hooks
// ======================================================================

impl Vector {
    /// Builds a vector from dynamically typed elements.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeConversion`] if any element is not a
    /// number or does not fit in an `f64`.
    pub fn from_operands<'a, I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Operand>,
    {
        let components = items
            .into_iter()
            .map(Operand::to_component)
            .collect::<std::result::Result<Vec<f64>, _>>()?;
        Ok(Self::from(components))
    }

    /// Equality hook: defined only against another vector.
    #[must_use]
    pub fn eq_operand(&self, other: &Operand) -> Outcome<bool> {
        match other {
            Operand::Vector(v) => Outcome::Value(self == v),
            _ => Outcome::Unsupported,
        }
    }

    /// Forward addition hook.
    ///
    /// Accepts another vector, or a tuple, list or set made only of numbers,
    /// padding the shorter side with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeConversion`] if a number in `other` does
    /// not fit in an `f64`.
    pub fn add_operand(&self, other: &Operand) -> Result<Outcome<Vector>> {
        if let Operand::Vector(v) = other {
            return Ok(Outcome::Value(self + v));
        }
        let Some(items) = other.items() else {
            return Ok(Outcome::Unsupported);
        };
        if !items.iter().all(|item| matches!(item, Operand::Number(_))) {
            return Ok(Outcome::Unsupported);
        }
        let rhs = Vector::from_operands(items)?;
        Ok(Outcome::Value(self + &rhs))
    }

    /// Reflected addition hook; addition is commutative.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::add_operand`].
    pub fn radd_operand(&self, other: &Operand) -> Result<Outcome<Vector>> {
        self.add_operand(other)
    }

    /// Forward multiplication hook: accepts numbers only.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeConversion`] if the scalar does not fit in
    /// an `f64`.
    pub fn mul_operand(&self, other: &Operand) -> Result<Outcome<Vector>> {
        match other {
            Operand::Number(scalar) => self.scale(scalar).map(Outcome::Value),
            _ => Ok(Outcome::Unsupported),
        }
    }

    /// Reflected multiplication hook; scalar multiplication is commutative.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::mul_operand`].
    pub fn rmul_operand(&self, other: &Operand) -> Result<Outcome<Vector>> {
        self.mul_operand(other)
    }
}

impl TryFrom<&Operand> for Vector {
    type Error = VectorError;

    fn try_from(operand: &Operand) -> Result<Self> {
        match operand {
            Operand::Vector(v) => Ok(v.pos()),
            Operand::Tuple(items) | Operand::List(items) | Operand::Set(items) => {
                Self::from_operands(items)
            }
            Operand::Text(_) => Err(ConversionError::NotNumeric { type_name: "str" }.into()),
            other => Err(VectorError::TypeMismatch {
                message: format!("'{}' object is not iterable", other.type_name()),
            }),
        }
    }
}

// ======================================================================
// Native hooks of the other operand kinds
// ======================================================================

fn forward_add(lhs: &Operand, rhs: &Operand) -> Result<Outcome<Operand>> {
    let concat = |a: &[Operand], b: &[Operand]| [a, b].concat();
    Ok(match (lhs, rhs) {
        (Operand::Vector(v), other) => v.add_operand(other)?.map(Operand::Vector),
        (Operand::Number(a), Operand::Number(b)) => Outcome::Value(Operand::Number(a.add_number(b))),
        (Operand::Tuple(a), Operand::Tuple(b)) => Outcome::Value(Operand::Tuple(concat(a, b))),
        (Operand::List(a), Operand::List(b)) => Outcome::Value(Operand::List(concat(a, b))),
        (Operand::Text(a), Operand::Text(b)) => Outcome::Value(Operand::Text(format!("{a}{b}"))),
        _ => Outcome::Unsupported,
    })
}

fn reflected_add(this: &Operand, other: &Operand) -> Result<Outcome<Operand>> {
    match this {
        Operand::Vector(v) => Ok(v.radd_operand(other)?.map(Operand::Vector)),
        _ => Ok(Outcome::Unsupported),
    }
}

fn forward_mul(lhs: &Operand, rhs: &Operand) -> Result<Outcome<Operand>> {
    Ok(match (lhs, rhs) {
        (Operand::Vector(v), other) => v.mul_operand(other)?.map(Operand::Vector),
        (Operand::Number(a), Operand::Number(b)) => Outcome::Value(Operand::Number(a.mul_number(b))),
        _ => Outcome::Unsupported,
    })
}

fn reflected_mul(this: &Operand, other: &Operand) -> Result<Outcome<Operand>> {
    match this {
        Operand::Vector(v) => Ok(v.rmul_operand(other)?.map(Operand::Vector)),
        _ => Ok(Outcome::Unsupported),
    }
}

fn forward_eq(lhs: &Operand, rhs: &Operand) -> Outcome<bool> {
    let pairwise = |a: &[Operand], b: &[Operand]| {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(x, y))
    };
    match (lhs, rhs) {
        (Operand::Vector(v), other) => v.eq_operand(other),
        (Operand::None, Operand::None) => Outcome::Value(true),
        (Operand::Number(a), Operand::Number(b)) => Outcome::Value(a.numeric_eq(b)),
        (Operand::Text(a), Operand::Text(b)) => Outcome::Value(a == b),
        (Operand::Tuple(a), Operand::Tuple(b)) | (Operand::List(a), Operand::List(b)) => {
            Outcome::Value(pairwise(a, b))
        }
        (Operand::Set(a), Operand::Set(b)) => {
            let within = |xs: &[Operand], ys: &[Operand]| {
                xs.iter().all(|x| ys.iter().any(|y| equals(x, y)))
            };
            Outcome::Value(within(a, b) && within(b, a))
        }
        _ => Outcome::Unsupported,
    }
}

// ======================================================================
// Protocol
// ======================================================================

type Hook = fn(&Operand, &Operand) -> Result<Outcome<Operand>>;

fn resolve(symbol: &str, lhs: &Operand, rhs: &Operand, forward: Hook, reflected: Hook) -> Result<Operand> {
    if let Outcome::Value(value) = forward(lhs, rhs)? {
        return Ok(value);
    }
    trace!(
        op = symbol,
        lhs = lhs.type_name(),
        rhs = rhs.type_name(),
        "forward operation unsupported, trying reflected"
    );
    if let Outcome::Value(value) = reflected(rhs, lhs)? {
        return Ok(value);
    }
    debug!(
        op = symbol,
        lhs = lhs.type_name(),
        rhs = rhs.type_name(),
        "no operand supports operation"
    );
    Err(VectorError::unsupported_operands(
        symbol,
        lhs.type_name(),
        rhs.type_name(),
    ))
}

/// `lhs + rhs` with reflected fallback.
///
/// # Errors
///
/// - [`VectorError::TypeMismatch`] if neither operand supports the pair.
/// - [`VectorError::TypeConversion`] if a numeric element does not fit in
///   an `f64`.
pub fn add(lhs: &Operand, rhs: &Operand) -> Result<Operand> {
    resolve("+", lhs, rhs, forward_add, reflected_add)
}

/// `lhs * rhs` with reflected fallback.
///
/// # Errors
///
/// - [`VectorError::TypeMismatch`] if neither operand supports the pair.
/// - [`VectorError::TypeConversion`] if a scalar does not fit in an `f64`.
pub fn mul(lhs: &Operand, rhs: &Operand) -> Result<Operand> {
    resolve("*", lhs, rhs, forward_mul, reflected_mul)
}

/// `lhs == rhs`: forward hook, then reflected hook, then `false`.
#[must_use]
pub fn equals(lhs: &Operand, rhs: &Operand) -> bool {
    if let Outcome::Value(eq) = forward_eq(lhs, rhs) {
        return eq;
    }
    trace!(
        lhs = lhs.type_name(),
        rhs = rhs.type_name(),
        "forward equality unsupported, trying reflected"
    );
    forward_eq(rhs, lhs).into_option().unwrap_or(false)
}

/// `lhs != rhs`.
#[must_use]
pub fn not_equals(lhs: &Operand, rhs: &Operand) -> bool {
    !equals(lhs, rhs)
}
