//! Error wrapper carrying an accumulated key/value field map.
//!
//! This module provides [`AnnotatedError`], a wrapper that pairs any error
//! with a map of diagnostic fields. Wrapping an already-annotated chain merges
//! the nearest ancestor's fields into the new layer, so the outermost
//! annotation always holds the union of everything recorded beneath it.
//!
//! Field values are deliberately kept out of the rendered message: the message
//! stays one of a bounded set of templates no matter how many distinct field
//! values flow through, which keeps log-line cardinality flat. See the crate
//! docs for the full rationale.

use std::error::Error;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::chain;
use crate::types::{FieldMap, FieldValue, FieldVec};

mod traits;

/// Error wrapper that stores an optional cause plus a field map read by
/// logging code.
///
/// The map is behind a read/write lock because extraction may happen on a
/// different thread than construction. After construction the map is never
/// written again; re-annotation builds a new value with a freshly merged map.
#[must_use]
pub struct AnnotatedError {
    cause: Option<Box<dyn Error + Send + Sync>>,
    fields: RwLock<FieldMap>,
}

impl AnnotatedError {
    /// Wraps `cause`, merging fields from its chain and overlaying `pairs`.
    ///
    /// The pair sequence is consumed two entries at a time: the first entry of
    /// each pair must be a [`FieldValue::Str`] to be used as a key, otherwise
    /// the pair is dropped; an unpaired trailing entry is ignored. On key
    /// collision the newly supplied value wins.
    ///
    /// Merging lifts fields from the *nearest* annotated ancestor only. Every
    /// prior layer built through this constructor already holds the union of
    /// the layers beneath it, so one hop suffices; a field-bearing value
    /// assembled some other way and buried deeper in the chain is not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::{fields, AnnotatedError};
    ///
    /// let err = AnnotatedError::wrap("mysql has gone away", fields!["user_id" => 180]);
    /// let err = AnnotatedError::wrap(err, fields!["table" => "users"]);
    ///
    /// assert_eq!(err.to_string(), "mysql has gone away");
    /// assert_eq!(err.fields().len(), 2);
    /// ```
    pub fn wrap<E, I>(cause: E, pairs: I) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
        I: IntoIterator<Item = FieldValue>,
    {
        let cause = cause.into();
        let mut fields = FieldMap::new();

        let chain_head: &(dyn Error + 'static) = &*cause;
        if let Some(nearest) = chain::nearest_annotated(chain_head) {
            let guard = nearest.read_fields();
            for (key, value) in guard.iter() {
                fields.insert(key.clone(), value.clone());
            }
        }

        merge_pairs(&mut fields, pairs);

        Self { cause: Some(cause), fields: RwLock::new(fields) }
    }

    /// Creates an annotation with no underlying cause.
    ///
    /// The rendered message falls back to the field map itself; real call
    /// sites almost always have a cause and go through [`wrap`](Self::wrap).
    pub fn root<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = FieldValue>,
    {
        let mut fields = FieldMap::new();
        merge_pairs(&mut fields, pairs);
        Self { cause: None, fields: RwLock::new(fields) }
    }

    /// Returns an independent copy of the field map.
    ///
    /// Mutating the returned map never affects this error; the copy is taken
    /// under the read lock, so concurrent callers all observe the complete
    /// map.
    #[must_use]
    pub fn fields(&self) -> FieldMap {
        self.read_fields().clone()
    }

    /// Flattens the field map into an alternating key/value sequence.
    ///
    /// Entry order follows map iteration and is not stable across calls.
    #[must_use]
    pub fn pairs(&self) -> FieldVec {
        let guard = self.read_fields();
        let mut pairs = FieldVec::with_capacity(guard.len() * 2);
        for (key, value) in guard.iter() {
            pairs.push(FieldValue::Str(key.clone()));
            pairs.push(value.clone());
        }
        pairs
    }

    /// Returns the wrapped cause, when one exists.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }

    // The map is never written after construction, so a poisoned lock still
    // holds a complete map and can be read through.
    pub(crate) fn read_fields(&self) -> RwLockReadGuard<'_, FieldMap> {
        self.fields.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Overlays `pairs` onto `fields`, two entries at a time.
///
/// Pairs with a non-string key are skipped; an odd trailing entry is ignored.
fn merge_pairs<I>(fields: &mut FieldMap, pairs: I)
where
    I: IntoIterator<Item = FieldValue>,
{
    let mut pairs = pairs.into_iter();
    while let (Some(key), Some(value)) = (pairs.next(), pairs.next()) {
        if let FieldValue::Str(key) = key {
            fields.insert(key, value);
        }
    }
}
