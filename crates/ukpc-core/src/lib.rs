//! # ukpc-core — Foundational Postcode Types for the UKPC Stack
//!
//! This crate defines the postcode primitives of the UKPC Stack: the
//! canonical-form normalizer, the allocation-rule validator, and the
//! validated [`Postcode`] newtype built on top of them.
//!
//! ## Key Design Principles
//!
//! 1. **Canonical form is the only stored representation.** ALL reshaping
//!    flows through [`canonicalize`]. The canonical form is
//!    `<outward> <inward>` with a single separating space, and it is a
//!    fixed point of canonicalization.
//!
//! 2. **Validation is a total predicate.** [`is_valid`] never panics and
//!    has no error type; every malformed input maps to `false`. The
//!    allocation rules run as an ordered guard chain and the order is
//!    load-bearing.
//!
//! 3. **Newtype wrapper for the domain primitive.** [`Postcode`] is a
//!    validated newtype — no bare strings for postcodes across API
//!    boundaries. Deserialization routes through the constructor so that
//!    invalid values are rejected at the wire.
//!
//! 4. **Pure functions only.** No I/O, no shared state, no clock. Both
//!    core operations are stateless string transforms, safe to call from
//!    any number of threads without coordination.
//!
//! ## Case Policy
//!
//! Inputs are expected pre-uppercased. Neither component folds case: the
//! validator's positional checks admit only uppercase, and the
//! normalizer's prefix tables are uppercase literals.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ukpc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod postcode;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use canonical::canonicalize;
pub use error::{FormatError, PostcodeError};
pub use postcode::Postcode;
pub use validation::is_valid;
