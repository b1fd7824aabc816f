//! Regex pattern validator
//!
//! `Matches` is implemented by hand rather than via [`validator!`]: its
//! constructor is fallible (the pattern must compile) and the compiled
//! `Regex` should be built once and reused.

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// Compile the pattern once and reuse the validator; `Regex` compilation
/// is not cheap enough to do per call.
///
/// # Examples
///
/// ```rust
/// use fleetform_validator::prelude::*;
///
/// let v = Matches::new("^[0-9]{10}$").unwrap();
/// assert!(v.validate("9876543210").is_ok());
/// assert!(v.validate("98765").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
    pattern: String,
}

impl Matches {
    /// Compiles `pattern` into a validator.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the pattern does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern)?;
        Ok(Self { regex, pattern })
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validate for Matches {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::pattern_mismatch(self.pattern.clone()))
        }
    }
}

/// Creates a `Matches` validator from a pattern.
///
/// # Errors
///
/// Returns [`regex::Error`] if the pattern does not compile.
pub fn matches(pattern: impl Into<String>) -> Result<Matches, regex::Error> {
    Matches::new(pattern)
}
