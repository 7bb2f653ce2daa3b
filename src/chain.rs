//! Causal-chain search and field extraction.
//!
//! Standard library errors expose their chain one link at a time through
//! [`Error::source`]; there is no built-in "find the nearest value of type T
//! in this chain" utility, so [`nearest_annotated`] implements the walk
//! explicitly with `downcast_ref`. Plain wrapper layers without fields are
//! skipped transparently.

use std::error::Error;

use crate::types::{AnnotatedError, FieldValue, FieldVec};

/// Finds the nearest [`AnnotatedError`] in `err`'s causal chain.
///
/// The search starts at `err` itself and follows `source()` links toward the
/// root, returning the first annotated layer it encounters.
///
/// # Examples
///
/// ```
/// use error_fields::{fields, nearest_annotated, AnnotatedError};
///
/// let err = AnnotatedError::wrap("boom", fields!["shard" => 7]);
/// assert!(nearest_annotated(&err).is_some());
///
/// let plain = std::io::Error::other("boom");
/// assert!(nearest_annotated(&plain).is_none());
/// ```
pub fn nearest_annotated<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a AnnotatedError> {
    let mut current: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(err) = current {
        if let Some(annotated) = err.downcast_ref::<AnnotatedError>() {
            return Some(annotated);
        }
        current = err.source();
    }
    None
}

/// Flattens the fields of the nearest annotated layer in `err`'s chain into
/// an alternating key/value sequence, appending `extra` pairs at the end.
///
/// When no annotated layer exists anywhere in the chain, the result is just
/// the `extra` pairs, passed through verbatim. The sequence is shaped for a
/// variadic structured-logging call; entry order follows map iteration and is
/// not stable across calls, except that `extra` always comes last.
///
/// # Examples
///
/// ```
/// use error_fields::{field_pairs, fields, AnnotatedError, FieldValue};
///
/// let err = AnnotatedError::wrap("timeout", fields!["host" => "db-01"]);
/// let pairs = field_pairs(&err, fields!["retries" => 2]);
///
/// assert_eq!(pairs.len(), 4);
/// assert_eq!(pairs[2], FieldValue::from("retries"));
/// ```
pub fn field_pairs<I>(err: &(dyn Error + 'static), extra: I) -> FieldVec
where
    I: IntoIterator<Item = FieldValue>,
{
    match nearest_annotated(err) {
        Some(annotated) => {
            let mut pairs = annotated.pairs();
            pairs.extend(extra);
            pairs
        }
        None => extra.into_iter().collect(),
    }
}
