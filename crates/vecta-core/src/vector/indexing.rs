//! Positional access and slicing for [`Vector`].
//!
//! Indices may be negative and count from the end. Slices follow the
//! conventional `start:stop:step` clamping rules and always produce a new
//! [`Vector`], never a plain `Vec`.

use std::ops::{Index, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{Result, VectorError};

use super::Vector;

/// A `start:stop:step` selection with optional bounds.
///
/// Omitted bounds default to the whole vector in the direction of `step`;
/// an omitted step is `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slice {
    /// First position, inclusive.
    pub start: Option<isize>,
    /// Last position, exclusive.
    pub stop: Option<isize>,
    /// Distance between selected positions; negative walks backwards.
    pub step: Option<isize>,
}

/// Bounds of a [`Slice`] resolved against a concrete length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    /// First selected position.
    pub start: isize,
    /// Exclusive stop; `-1` when a backwards slice runs past position 0.
    pub stop: isize,
    /// Non-zero step.
    pub step: isize,
    /// Number of positions the slice selects.
    pub count: usize,
}

impl Slice {
    /// Create a slice from optional bounds and step.
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The slice selecting every component.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Replace the step.
    #[must_use]
    pub fn step_by(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolve the bounds against a sequence of length `len`.
    ///
    /// Out-of-range bounds are clamped, never rejected.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroSliceStep`] if the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(VectorError::ZeroSliceStep);
        }
        // Keep `-step` representable.
        let step = step.max(-isize::MAX);
        let len = isize::try_from(len).unwrap_or(isize::MAX);

        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self
            .stop
            .map_or(if step < 0 { lower } else { upper }, clamp);

        let count = if step < 0 {
            if stop < start {
                (start - stop - 1) / (-step) + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            stop,
            step,
            count: count.unsigned_abs(),
        })
    }
}

impl SliceIndices {
    /// The selected storage positions, in selection order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).map(move |i| {
            // `i < count`, so every position lies in `[0, len)`.
            let offset = isize::try_from(i).unwrap_or(isize::MAX);
            (self.start + offset * self.step).unsigned_abs()
        })
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(range: RangeInclusive<isize>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(Some(start), inclusive_stop(end), None)
    }
}

impl From<RangeToInclusive<isize>> for Slice {
    fn from(range: RangeToInclusive<isize>) -> Self {
        Self::new(None, inclusive_stop(range.end), None)
    }
}

/// Exclusive stop for an inclusive end; `-1` (the last component) has no
/// exclusive counterpart and means "to the end".
fn inclusive_stop(end: isize) -> Option<isize> {
    if end == -1 { None } else { Some(end.saturating_add(1)) }
}

/// The argument of [`Vector::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single, possibly negative, position.
    Position(isize),
    /// A sub-sequence.
    Range(Slice),
    /// Any other key; carries the key's type name for the error message.
    Unsupported(&'static str),
}

macro_rules! impl_key_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(index: $ty) -> Self {
                    // Indices beyond `isize` are out of range for any vector.
                    let position = isize::try_from(index).unwrap_or(if index > 0 {
                        isize::MAX
                    } else {
                        isize::MIN
                    });
                    Self::Position(position)
                }
            }
        )*
    };
}

impl_key_from_int!(i32, i64, isize, u32, u64, usize);

impl From<Slice> for Key {
    fn from(slice: Slice) -> Self {
        Self::Range(slice)
    }
}

macro_rules! impl_key_from_range {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(range: $ty) -> Self {
                    Self::Range(Slice::from(range))
                }
            }
        )*
    };
}

impl_key_from_range!(
    RangeFull,
    Range<isize>,
    RangeFrom<isize>,
    RangeTo<isize>,
    RangeInclusive<isize>,
    RangeToInclusive<isize>
);

/// The result of [`Vector::get`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A single component, from an integral key.
    Component(f64),
    /// A new vector, from a slice key.
    Vector(Vector),
}

impl Selection {
    /// The component, if this selection came from an integral key.
    #[must_use]
    pub fn as_component(&self) -> Option<f64> {
        match self {
            Self::Component(value) => Some(*value),
            Self::Vector(_) => None,
        }
    }

    /// The vector, if this selection came from a slice key.
    #[must_use]
    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Self::Component(_) => None,
            Self::Vector(vector) => Some(vector),
        }
    }
}

impl Vector {
    /// The component at `index`; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] unless
    /// `-len <= index < len`.
    pub fn component(&self, index: isize) -> Result<f64> {
        let out_of_range = || VectorError::IndexOutOfRange {
            index,
            len: self.len(),
        };
        let len = isize::try_from(self.len()).map_err(|_| out_of_range())?;
        let resolved = if index < 0 { index + len } else { index };
        if !(0..len).contains(&resolved) {
            return Err(out_of_range());
        }
        Ok(self.as_slice()[resolved.unsigned_abs()])
    }

    /// A new vector holding the components selected by `slice`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroSliceStep`] if the step is zero.
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Vector> {
        let indices = slice.into().indices(self.len())?;
        let data = self.as_slice();
        Ok(indices.positions().map(|i| data[i]).collect())
    }

    /// Dynamic access: a component for an integral key, a vector for a slice.
    ///
    /// # Errors
    ///
    /// - [`VectorError::IndexOutOfRange`] for an integral key out of bounds.
    /// - [`VectorError::ZeroSliceStep`] for a slice with step zero.
    /// - [`VectorError::TypeMismatch`] for any other key type.
    pub fn get(&self, key: impl Into<Key>) -> Result<Selection> {
        match key.into() {
            Key::Position(index) => self.component(index).map(Selection::Component),
            Key::Range(slice) => self.slice(slice).map(Selection::Vector),
            Key::Unsupported(_) => Err(VectorError::bad_index("Vector")),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &f64 {
        &self.as_slice()[index]
    }
}
