//! # Error Types
//!
//! Error types for the postcode primitives, built with `thiserror`.
//!
//! ## Design
//!
//! - The normalizer has exactly one failure mode and one error kind:
//!   [`FormatError`]. There is no partial result and no retry.
//! - The validator has no error type at all. Validation is a predicate;
//!   every malformed input maps to `false`, never to an `Err` or a panic.
//! - Errors carry the offending input so that callers can diagnose bad
//!   data without guesswork.

use thiserror::Error;

/// Error raised when a raw string cannot be reshaped into canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// After stripping to alphanumerics, no layout rule identified the
    /// outward/inward split point. Carries the raw input as given.
    #[error("Unable to format {0}")]
    UnrecognizedLayout(String),
}

/// Construction error for the validated [`Postcode`](crate::Postcode) type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostcodeError {
    /// The input could not be reshaped into canonical form.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// The canonical form failed the scheme's allocation rules.
    #[error("postcode failed allocation-rule validation: \"{0}\"")]
    FailedValidation(String),

    /// The input was expected to already be in canonical form but was not.
    #[error("postcode is not in canonical form: \"{0}\"")]
    NotCanonical(String),
}
