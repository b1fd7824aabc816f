//! Presence validator for `Option` values

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Validates that an `Option` is `Some`.
    ///
    /// Use together with [`Optional`](crate::combinators::Optional) for the
    /// inverse: a value that may be absent but is constrained when present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleetform_validator::prelude::*;
    ///
    /// let v = required::<u32>();
    /// assert!(v.validate(&Some(4)).is_ok());
    /// assert!(v.validate(&None).is_err());
    /// ```
    pub Required<T> for Option<T>;
    rule(input) { input.is_some() }
    error(input) {
        ValidationError::new("required", "Value is required")
    }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn some_passes() {
        let v = required::<&str>();
        assert!(v.validate(&Some("ac")).is_ok());
    }

    #[test]
    fn none_fails() {
        let v = required::<&str>();
        let err = v.validate(&None).unwrap_err();
        assert_eq!(err.code, "required");
    }
}
