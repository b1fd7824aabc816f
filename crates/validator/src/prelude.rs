//! Convenient re-exports for common usage
//!
//! ```rust
//! use fleetform_validator::prelude::*;
//!
//! let v = not_empty().and(max_length(80));
//! assert!(v.validate("ok").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};

pub use crate::combinators::{
    And, Each, Not, Optional, Or, and, each, not, optional, or,
};

pub use crate::validators::{
    Matches, Max, MaxLength, MaxSize, Min, MinLength, MinSize, NotEmpty, Required, matches, max,
    max_length, max_size, min, min_length, min_size, not_empty, required,
};

pub use crate::{compose, validator};
