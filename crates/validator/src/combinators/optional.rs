//! OPTIONAL combinator - accepts `None`, validates `Some`

use crate::foundation::{Validate, ValidationError};

/// Makes a validator accept `None`.
///
/// Succeeds if the input is `None`; otherwise applies the inner validator
/// to the contained value. Useful for fields that are optional but still
/// constrained when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V: Validate>(inner: V) -> Optional<V> {
    Optional::new(inner)
}
