//! Error annotation with accumulated key/value fields and low-cardinality
//! messages.
//!
//! Wrapping an error with [`AnnotatedError`] attaches diagnostic fields to it
//! without touching its message. Re-annotating at a higher layer merges the
//! fields already in the chain into the new layer, so nothing recorded below
//! is lost, and a structured logger at the top of the stack extracts the
//! whole set in one call.
//!
//! The message never carries field values. A dynamic message like
//! `"unable to delete user 180: mysql has gone away"` has a log cardinality
//! of affected-users times error-conditions; the annotated form keeps the
//! message fixed (`"unable to delete user"`) and moves `user_id = 180` into
//! fields, so monitoring sees one message template no matter how many users
//! are affected.
//!
//! # Examples
//!
//! ## Annotate, wrap, extract
//!
//! ```
//! use error_fields::{field_pairs, fields, AnnotatedError};
//!
//! let err = AnnotatedError::wrap("mysql has gone away", fields!["user_id" => 180]);
//! let err = AnnotatedError::wrap(err, fields!["table" => "users"]);
//!
//! // The message is the cause's message, fields stay out of it.
//! assert_eq!(err.to_string(), "mysql has gone away");
//!
//! // Both layers' fields come back in one flat sequence for the logger.
//! let pairs = field_pairs(&err, fields![]);
//! assert_eq!(pairs.len(), 4);
//! ```
//!
//! ## On a `Result`
//!
//! ```
//! use error_fields::prelude::*;
//!
//! fn delete_user(user_id: u64) -> AnnotatedResult<()> {
//!     let outcome: Result<(), &str> = Err("mysql has gone away");
//!     outcome.annotate(fields!["user_id" => user_id])
//! }
//!
//! let err = delete_user(180).unwrap_err();
//! assert_eq!(err.fields()["user_id"], FieldValue::from(180u64));
//! ```

/// Causal-chain search and field extraction
pub mod chain;
/// Macros for building field pair sequences
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for attaching fields to `Result` values
pub mod traits;
/// AnnotatedError and field value types
pub mod types;

/// Tracing integration - emits extracted fields as one event (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{field_pairs, nearest_annotated};
pub use traits::ResultExt;
pub use types::{AnnotatedError, AnnotatedResult, FieldMap, FieldValue, FieldVec};
