//! Built-in validators
//!
//! - [`length`] — string length checks (`NotEmpty`, `MinLength`, `MaxLength`)
//! - [`numeric`] — ordered-value bounds (`Min`, `Max`)
//! - [`pattern`] — regex matching (`Matches`)
//! - [`size`] — collection size checks (`MinSize`, `MaxSize`)
//! - [`nullable`] — `Option` presence (`Required`)

pub mod length;
pub mod nullable;
pub mod numeric;
pub mod pattern;
pub mod size;

pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use nullable::{Required, required};
pub use numeric::{Max, Min, max, min};
pub use pattern::{Matches, matches};
pub use size::{MaxSize, MinSize, max_size, min_size};
