//! Collection size validators
//!
//! Generic over the element type via `PhantomData`, so the same validator
//! type serves slices of any element.

use crate::foundation::ValidationError;
use crate::validator;

validator! {
    /// Validates that a slice has at least `min` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleetform_validator::prelude::*;
    ///
    /// let v = min_size::<u32>(1);
    /// assert!(v.validate(&[7]).is_ok());
    /// assert!(v.validate(&[]).is_err());
    /// ```
    pub MinSize<T> { min: usize } for [T];
    rule(self, input) { input.len() >= self.min }
    error(self, input) {
        ValidationError::new(
            "min_size",
            format!("Must have at least {} elements", self.min),
        )
        .with_param("min", self.min.to_string())
        .with_param("actual", input.len().to_string())
    }
    fn min_size(min: usize);
}

validator! {
    /// Validates that a slice has at most `max` elements.
    pub MaxSize<T> { max: usize } for [T];
    rule(self, input) { input.len() <= self.max }
    error(self, input) {
        ValidationError::new(
            "max_size",
            format!("Must have at most {} elements", self.max),
        )
        .with_param("max", self.max.to_string())
        .with_param("actual", input.len().to_string())
    }
    fn max_size(max: usize);
}
