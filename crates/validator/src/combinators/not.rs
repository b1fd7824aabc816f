//! NOT combinator - logical negation of a validator

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds if the inner validator fails, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                format!("Expected `{}` to fail, but it passed", self.inner.name()),
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}
