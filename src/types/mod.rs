//! Core types for field-carrying errors.
//!
//! # Examples
//!
//! ```
//! use error_fields::{fields, AnnotatedError, FieldValue};
//!
//! let err = AnnotatedError::wrap("connection refused", fields!["host" => "db-01", "attempt" => 3]);
//!
//! assert_eq!(err.fields()["host"], FieldValue::from("db-01"));
//! assert_eq!(err.to_string(), "connection refused");
//! ```

use std::collections::HashMap;

use smallvec::SmallVec;

pub mod annotated_error;
pub mod field_value;

pub use annotated_error::AnnotatedError;
pub use field_value::FieldValue;

/// Field storage: field name to value.
///
/// Iteration order is arbitrary and not stable across calls; consumers that
/// need ordering must sort the extracted copy themselves.
pub type FieldMap = HashMap<String, FieldValue>;

/// SmallVec-backed flat pair sequence, alternating key and value.
///
/// Inline storage covers four pairs, so typical extractions stay off the heap
/// for the sequence itself.
pub type FieldVec = SmallVec<[FieldValue; 8]>;

/// Result alias that fails with [`AnnotatedError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type AnnotatedResult<T> = Result<T, AnnotatedError>;
