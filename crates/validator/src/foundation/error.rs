//! Error types for validation failures
//!
//! A single structured error type that supports field paths, error codes,
//! parameterized messages, and nested errors (for element-wise collection
//! validation).
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A structured validation error.
///
/// # Examples
///
/// ```rust
/// use fleetform_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_field("owner_name")
///     .with_param("min", "5")
///     .with_param("actual", "3");
///
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "pattern_mismatch", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional field path for nested object validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested validation errors, used when validating collections where
    /// multiple elements can each fail.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// Static strings do not allocate; dynamic strings (e.g. `format!`)
    /// allocate only when needed.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors (including nested, recursively).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.nested.is_empty() {
            write!(f, " ({} nested)", self.nested.len())?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// Convenience constructors for the recurring error shapes.
impl ValidationError {
    /// Creates a "required" error.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "Value is required").with_field(field)
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "pattern_mismatch" error.
    pub fn pattern_mismatch(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self::new("pattern_mismatch", "Value does not match expected format")
            .with_param("pattern", pattern)
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
    }

    #[test]
    fn error_with_field_and_params() {
        let error = ValidationError::new("min", "Too small")
            .with_field("occupants")
            .with_param("min", "1")
            .with_param("actual", "0");

        assert_eq!(error.field.as_deref(), Some("occupants"));
        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("actual"), Some("0"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn nested_errors_are_counted() {
        let error = ValidationError::new("each_failed", "2 elements failed")
            .with_nested_error(ValidationError::new("max_bytes", "too big"))
            .with_nested_error(ValidationError::new("max_bytes", "too big"));

        assert!(error.has_nested());
        assert_eq!(error.total_error_count(), 3);
    }

    #[test]
    fn display_includes_field() {
        let error = ValidationError::required("owner_name");
        assert_eq!(error.to_string(), "[owner_name] required: Value is required");
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("required", "Value is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn convenience_constructors() {
        let error = ValidationError::min_length(5, 3);
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("actual"), Some("3"));

        let error = ValidationError::out_of_range(1, 6, 9);
        assert_eq!(error.code, "out_of_range");
        assert_eq!(error.param("max"), Some("6"));

        let error = ValidationError::pattern_mismatch("^[0-9]{10}$");
        assert_eq!(error.code, "pattern_mismatch");
    }
}
