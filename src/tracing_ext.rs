//! Tracing integration for error-fields.
//!
//! This module bridges extracted fields into the `tracing` ecosystem: one
//! event per error, carrying the low-cardinality message and the flattened
//! field pairs.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-fields = { version = "0.1", features = ["tracing"] }
//! ```

use std::error::Error;

use crate::chain;
use crate::types::AnnotatedError;

/// Emits an error-level event for `err` with its accumulated fields.
///
/// The nearest annotated layer in the chain supplies the fields; a chain with
/// no annotation emits with an empty field sequence. The event message is the
/// error's own rendered message, so its cardinality stays bounded.
///
/// # Example
///
/// ```rust,ignore
/// use error_fields::tracing_ext::emit;
///
/// if let Err(err) = handle_request(req) {
///     emit(&err);
/// }
/// ```
pub fn emit(err: &(dyn Error + 'static)) {
    let pairs = chain::field_pairs(err, []);
    tracing::error!(fields = ?pairs, "{}", err);
}

/// Extension trait that emits a tracing event when a `Result` holds an error.
pub trait EmitOnError {
    /// Emits an error-level event for the `Err` variant, then passes the
    /// `Result` through unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_fields::tracing_ext::EmitOnError;
    ///
    /// let outcome = delete_user(180).emit_on_error();
    /// ```
    fn emit_on_error(self) -> Self;
}

impl<T> EmitOnError for Result<T, AnnotatedError> {
    fn emit_on_error(self) -> Self {
        if let Err(err) = &self {
            tracing::error!(fields = ?err.pairs(), "{}", err);
        }
        self
    }
}
