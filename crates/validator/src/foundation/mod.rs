//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees, and compose through the logical combinators in
//! [`crate::combinators`]. Errors are structured data: a machine-readable
//! code, a human-readable message, an optional field path, and optional
//! parameters for message templating.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
