//! Traits for attaching fields to `Result` values.
//!
//! # Examples
//!
//! ```
//! use error_fields::traits::ResultExt;
//! use error_fields::fields;
//!
//! let result: Result<(), &str> = Err("lookup failed");
//! let annotated = result.annotate(fields!["user_id" => 180]);
//!
//! assert!(annotated.is_err());
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
