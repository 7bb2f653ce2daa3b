//! Ergonomic macros for building field pair sequences.
//!
//! - [`macro@crate::fields`] - Builds a well-formed [`FieldVec`](crate::types::FieldVec)
//!   from `key => value` arms, converting both sides through
//!   [`FieldValue::from`](crate::types::FieldValue).
//! - [`macro@crate::annotate`] - Shorthand for
//!   [`AnnotatedError::wrap`](crate::types::AnnotatedError::wrap) with inline
//!   `key => value` arms.
//!
//! # Examples
//!
//! ```
//! use error_fields::{annotate, fields, AnnotatedError};
//!
//! let err = annotate!("replication lag", "shard" => 7, "lag_ms" => 1500);
//! assert_eq!(err.fields().len(), 2);
//!
//! let pairs = fields!["user_id" => 180, "dry_run" => false];
//! assert_eq!(pairs.len(), 4);
//! ```

/// Builds a flat [`FieldVec`](crate::types::FieldVec) from `key => value` arms.
///
/// Each side is converted through `FieldValue::from`, so keys written as
/// string literals always land as usable string keys. The raw constructor
/// APIs still accept arbitrary sequences; this macro is the way to never
/// produce a malformed one.
///
/// # Examples
///
/// ```
/// use error_fields::{fields, FieldValue};
///
/// let pairs = fields!["user_id" => 180, "table" => "users"];
/// assert_eq!(pairs[0], FieldValue::from("user_id"));
/// assert_eq!(pairs.len(), 4);
///
/// let empty = fields![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::types::FieldVec::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut pairs = $crate::types::FieldVec::new();
        $(
            pairs.push($crate::types::FieldValue::from($key));
            pairs.push($crate::types::FieldValue::from($value));
        )+
        pairs
    }};
}

/// Wraps a cause with inline `key => value` arms.
///
/// Expands to [`AnnotatedError::wrap`](crate::types::AnnotatedError::wrap)
/// over a [`fields!`](crate::fields) sequence.
///
/// # Examples
///
/// ```
/// use error_fields::annotate;
///
/// let io_err = std::io::Error::other("disk full");
/// let err = annotate!(io_err, "path" => "/var/lib/queue", "bytes_needed" => 4096);
///
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[macro_export]
macro_rules! annotate {
    ($cause:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::types::AnnotatedError::wrap($cause, $crate::fields!($($key => $value),*))
    };
}
