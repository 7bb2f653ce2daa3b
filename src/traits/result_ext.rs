//! Extension trait for annotating `Result` errors with fields.
//!
//! This module provides [`ResultExt`], which attaches diagnostic fields to
//! the error side of a `Result` without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_fields::prelude::*;
//!
//! fn load_profile(user_id: u64) -> AnnotatedResult<String> {
//!     let row: Result<String, &str> = Err("row not found");
//!     row.annotate(fields!["user_id" => user_id, "table" => "profiles"])
//! }
//!
//! assert!(load_profile(180).is_err());
//! ```

use std::error::Error;

use crate::types::{AnnotatedError, FieldValue};

/// Extension trait for annotating the error side of a `Result` with fields.
///
/// Both methods wrap the error in an [`AnnotatedError`], merging fields from
/// any annotated layer already present in the error's chain. Since
/// `AnnotatedError` is itself wrappable, calls chain naturally: each layer's
/// map carries the union of everything recorded below it.
///
/// # Performance
///
/// [`annotate_with`](ResultExt::annotate_with) defers building the pair
/// sequence until an error actually occurs, so field values that are
/// expensive to produce cost nothing on the success path.
///
/// # Examples
///
/// ```
/// use error_fields::prelude::*;
///
/// fn delete_user(user_id: u64) -> AnnotatedResult<()> {
///     let outcome: Result<(), &str> = Err("mysql has gone away");
///     outcome.annotate_with(|| fields!["user_id" => user_id])
/// }
///
/// let err = delete_user(180).unwrap_err();
/// assert_eq!(err.to_string(), "mysql has gone away");
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error with the given field pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::{fields, ResultExt};
    ///
    /// let result: Result<(), &str> = Err("failed");
    /// let annotated = result.annotate(fields!["attempt" => 3]);
    /// assert!(annotated.is_err());
    /// ```
    fn annotate<I>(self, pairs: I) -> Result<T, AnnotatedError>
    where
        I: IntoIterator<Item = FieldValue>;

    /// Wraps the error with lazily-built field pairs.
    ///
    /// The closure runs only when the `Result` is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::{fields, ResultExt};
    ///
    /// let payload = vec![1u8, 2, 3];
    /// let result: Result<(), &str> = Err("decode failed");
    /// let annotated = result.annotate_with(|| fields!["payload_len" => payload.len()]);
    /// assert!(annotated.is_err());
    /// ```
    fn annotate_with<F, I>(self, pairs: F) -> Result<T, AnnotatedError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = FieldValue>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    #[inline]
    fn annotate<I>(self, pairs: I) -> Result<T, AnnotatedError>
    where
        I: IntoIterator<Item = FieldValue>,
    {
        self.map_err(|e| AnnotatedError::wrap(e, pairs))
    }

    #[inline]
    fn annotate_with<F, I>(self, pairs: F) -> Result<T, AnnotatedError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = FieldValue>,
    {
        self.map_err(|e| AnnotatedError::wrap(e, pairs()))
    }
}
