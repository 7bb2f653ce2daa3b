//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_fields::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`], [`annotate!`]
//! - **Types**: [`AnnotatedError`], [`FieldValue`], the `FieldMap`/`FieldVec`
//!   aliases and [`AnnotatedResult`]
//! - **Traits**: [`ResultExt`]
//! - **Functions**: [`field_pairs`], [`nearest_annotated`]
//!
//! # Examples
//!
//! ```
//! use error_fields::prelude::*;
//!
//! fn fetch_row(table: &str, id: u64) -> AnnotatedResult<String> {
//!     let row: Result<String, &str> = Err("row not found");
//!     row.annotate(fields!["table" => table, "id" => id])
//! }
//!
//! let err = fetch_row("users", 180).unwrap_err();
//! let pairs = field_pairs(&err, fields!["handler" => "GET /users"]);
//! assert_eq!(pairs.len(), 6);
//! ```

// Macros
pub use crate::{annotate, fields};

// Core types
pub use crate::types::{AnnotatedError, AnnotatedResult, FieldMap, FieldValue, FieldVec};

// Traits
pub use crate::traits::ResultExt;

// Chain helpers
pub use crate::chain::{field_pairs, nearest_annotated};
