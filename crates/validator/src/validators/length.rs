//! String length validators
//!
//! Lengths are measured in Unicode scalar values (`chars().count()`), not
//! bytes, so multi-byte characters count as one.

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Validates that a string is not empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleetform_validator::prelude::*;
    ///
    /// let v = not_empty();
    /// assert!(v.validate("Acme Travels").is_ok());
    /// assert!(v.validate("   ").is_err());
    /// ```
    pub NotEmpty for str;
    rule(input) { !input.trim().is_empty() }
    error(input) {
        ValidationError::new("not_empty", "Value must not be empty")
    }
    fn not_empty();
}

validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) {
        ValidationError::min_length(self.min, input.chars().count())
    }
    fn min_length(min: usize);
}

validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) {
        ValidationError::max_length(self.max, input.chars().count())
    }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn not_empty_rejects_whitespace_only() {
        let v = not_empty();
        assert!(v.validate("x").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate(" \t ").is_err());
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let v = min_length(3);
        assert!(v.validate("äöü").is_ok());
        assert!(v.validate("äö").is_err());
    }

    #[test]
    fn max_length_boundary() {
        let v = max_length(5);
        assert!(v.validate("12345").is_ok());
        assert!(v.validate("123456").is_err());
    }

    #[test]
    fn min_length_error_params() {
        let v = min_length(5);
        let err = v.validate("ab").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("2"));
    }
}
