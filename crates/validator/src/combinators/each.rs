//! EACH combinator - validates each element of a collection

use crate::foundation::{Validate, ValidationError};

/// Validates each element of a slice.
///
/// Applies a validator to every element and collects all failures with
/// their indices, so a single pass surfaces every offending element.
///
/// # Examples
///
/// ```rust
/// use fleetform_validator::prelude::*;
///
/// let validator = each(min(1_u64));
///
/// assert!(validator.validate(&[3, 7]).is_ok());
///
/// let err = validator.validate(&[3, 0, 0]).unwrap_err();
/// assert_eq!(err.param("failed_indices"), Some("1,2"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new `Each` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failures: Vec<(usize, ValidationError)> = Vec::new();

        for (index, element) in input.iter().enumerate() {
            if let Err(e) = self.inner.validate(element) {
                failures.push((index, e));
            }
        }

        if failures.is_empty() {
            return Ok(());
        }

        let indices: Vec<String> = failures.iter().map(|(i, _)| i.to_string()).collect();
        let mut error = ValidationError::new(
            "each_failed",
            format!(
                "{} of {} elements failed validation",
                failures.len(),
                input.len()
            ),
        )
        .with_param("failed_count", failures.len().to_string())
        .with_param("total_count", input.len().to_string())
        .with_param("failed_indices", indices.join(","));

        for (_, e) in failures {
            error = error.with_nested_error(e);
        }

        Err(error)
    }
}

/// Creates an `Each` combinator.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;

    impl Validate for Positive {
        type Input = i32;

        fn validate(&self, input: &i32) -> Result<(), ValidationError> {
            if *input > 0 {
                Ok(())
            } else {
                Err(ValidationError::new("positive", "Must be positive"))
            }
        }
    }

    #[test]
    fn all_valid() {
        let validator = Each::new(Positive);
        assert!(validator.validate(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn collects_every_failure() {
        let validator = Each::new(Positive);
        let err = validator.validate(&[1, -2, -3]).unwrap_err();
        assert_eq!(err.param("failed_count"), Some("2"));
        assert_eq!(err.param("failed_indices"), Some("1,2"));
        assert_eq!(err.nested.len(), 2);
    }

    #[test]
    fn empty_slice_passes() {
        let validator = Each::new(Positive);
        let input: [i32; 0] = [];
        assert!(validator.validate(&input).is_ok());
    }
}
