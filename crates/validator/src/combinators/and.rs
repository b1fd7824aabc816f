//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Examples
///
/// ```rust
/// use fleetform_validator::prelude::*;
///
/// let validator = min_length(5).and(max_length(10));
///
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// assert!(validator.validate("verylongstring").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, min_length};

    #[test]
    fn both_pass() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn left_fails() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn right_fails() {
        let validator = And::new(min_length(2), max_length(4));
        assert!(validator.validate("toolong").is_err());
    }

    #[test]
    fn chained() {
        let validator = min_length(3).and(max_length(10)).and(min_length(5));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
    }
}
