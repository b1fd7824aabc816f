//! # fleetform-validator
//!
//! A composable, type-safe validation framework for the fleetform
//! onboarding engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use fleetform_validator::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let name = not_empty().and(max_length(80));
//! assert!(name.validate("Acme Travels").is_ok());
//! assert!(name.validate("").is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex
//! cases (see [`validators::Matches`] for a fallible constructor).
//!
//! ## Built-in Validators
//!
//! - **String**: [`NotEmpty`](validators::NotEmpty),
//!   [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`Matches`](validators::Matches)
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max)
//! - **Collection**: [`MinSize`](validators::MinSize), [`MaxSize`](validators::MaxSize)
//! - **Nullable**: [`Required`](validators::Required)

// ValidationError is the fundamental error type for all validators — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
