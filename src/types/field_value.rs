//! Dynamically-typed values for diagnostic fields.
//!
//! Logging call sites hand over whatever they have on hand: ids, counts,
//! flags, names. [`FieldValue`] is the common currency those values are
//! carried in, so a single flat pair sequence can mix types freely.
//!
//! # Examples
//!
//! ```
//! use error_fields::FieldValue;
//!
//! let id = FieldValue::from(180u64);
//! let name = FieldValue::from("users");
//!
//! assert_eq!(name.as_str(), Some("users"));
//! assert_eq!(id.as_str(), None);
//! ```

use core::fmt::{self, Display};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single key or value in a diagnostic field pair.
///
/// Keys are expected to be [`FieldValue::Str`]; a pair whose key is any other
/// variant is dropped during construction rather than rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Absent value, produced by `Option::None`.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl FieldValue {
    /// Returns the borrowed string when this value is a [`FieldValue::Str`].
    ///
    /// This is the check the construction merge uses to decide whether a pair
    /// has a usable key.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => Display::fmt(v, f),
            Self::Int(v) => Display::fmt(v, f),
            Self::UInt(v) => Display::fmt(v, f),
            Self::Float(v) => Display::fmt(v, f),
            Self::Str(v) => Display::fmt(v, f),
        }
    }
}

impl From<bool> for FieldValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($variant:ident: $($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for FieldValue {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value as _)
            }
        }
    )+};
}

impl_from_number!(Int: i8, i16, i32, i64, isize);
impl_from_number!(UInt: u8, u16, u32, u64, usize);
impl_from_number!(Float: f32, f64);

impl From<&str> for FieldValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Cow<'_, str>> for FieldValue {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
