//! Logical combinators for composing validators
//!
//! - [`And`] — both validators must pass
//! - [`Or`] — at least one validator must pass
//! - [`Not`] — inverts a validator
//! - [`Optional`] — accepts `None`, validates `Some`
//! - [`Each`] — applies a validator to every element of a slice

pub mod and;
pub mod each;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use each::{Each, each};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
