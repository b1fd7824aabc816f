//! Numeric bound validators
//!
//! Generic over any `PartialOrd + Display + Copy` type, so the same
//! validators serve integers, floats, and ordered newtypes.

use std::fmt::Display;

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Validates that a value is at least `min` (inclusive).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleetform_validator::prelude::*;
    ///
    /// let v = min(1_u32);
    /// assert!(v.validate(&1).is_ok());
    /// assert!(v.validate(&0).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

validator! {
    /// Validates that a value is at most `max` (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn min_inclusive() {
        let v = min(1_u32);
        assert!(v.validate(&1).is_ok());
        assert!(v.validate(&0).is_err());
    }

    #[test]
    fn max_inclusive() {
        let v = max(6_u32);
        assert!(v.validate(&6).is_ok());
        assert!(v.validate(&7).is_err());
    }

    #[test]
    fn range_via_and() {
        let v = min(1_u32).and(max(6_u32));
        assert!(v.validate(&3).is_ok());
        assert!(v.validate(&0).is_err());
        assert!(v.validate(&9).is_err());
    }

    #[test]
    fn works_for_floats() {
        let v = min(0.5_f64);
        assert!(v.validate(&0.5).is_ok());
        assert!(v.validate(&0.4).is_err());
    }

    #[test]
    fn error_params() {
        let v = min(1_u32);
        let err = v.validate(&0).unwrap_err();
        assert_eq!(err.code, "min");
        assert_eq!(err.param("min"), Some("1"));
        assert_eq!(err.param("actual"), Some("0"));
    }
}
