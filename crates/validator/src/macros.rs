//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`] — complete validator (struct + `Validate` impl + factory fn)
//! - [`compose!`] — AND-chain multiple validators
//!
//! # Examples
//!
//! ```rust,ignore
//! use fleetform_validator::validator;
//! use fleetform_validator::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_empty", "must not be empty") }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
//!     fn min_length(min: usize);
//! }
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.trim().is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Generic validator** (single type parameter with simple bounds):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", format!("must be >= {}", self.min)) }
///     fn min(value: T);
/// }
/// ```
///
/// **Phantom generic validator** (generic over the element type, no bounds):
/// ```rust,ignore
/// validator! {
///     pub MinSize<T> { min: usize } for [T];
///     rule(self, input) { input.len() >= self.min }
///     error(self, input) { ValidationError::new("min_size", "too few elements") }
///     fn min_size(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // Single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new, no factory ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Phantom generic unit + factory fn ────────────────────────────────
    //
    // Generic validators with no fields and no bounds on T.
    // Automatically adds `PhantomData<T>` to the struct.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen> for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen>() -> $name<$gen> {
            $name { _phantom: ::std::marker::PhantomData }
        }
    };

    // ── Phantom generic unit, no factory ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            _phantom: ::std::marker::PhantomData<$gen>,
        }

        impl<$gen> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Phantom generic struct + auto new + factory fn ───────────────────
    //
    // Generic validators with fields but no bounds on T.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen> { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Phantom generic struct + auto new, no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
            _phantom: ::std::marker::PhantomData<$gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field,)+ _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let validator = compose![not_empty(), max_length(80)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    validator! {
        /// Rejects strings containing whitespace.
        NoWhitespace for str;
        rule(input) { !input.contains(char::is_whitespace) }
        error(input) { ValidationError::new("no_whitespace", "must not contain whitespace") }
        fn no_whitespace();
    }

    #[test]
    fn unit_validator() {
        let v = NoWhitespace;
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("a b").is_err());
    }

    #[test]
    fn unit_factory() {
        let v = no_whitespace();
        assert!(v.validate("abc").is_ok());
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        ExactLength { len: usize } for str;
        rule(self, input) { input.chars().count() == self.len }
        error(self, input) {
            ValidationError::new("exact_length", format!("must be exactly {} characters", self.len))
        }
        fn exact_length(len: usize);
    }

    #[test]
    fn struct_validator_with_auto_new() {
        let v = ExactLength::new(3);
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("ab").is_err());
    }

    #[test]
    fn struct_factory() {
        let v = exact_length(2);
        assert!(v.validate("hi").is_ok());
        assert!(v.validate("hello").is_err());
    }

    #[test]
    fn error_content_from_macro() {
        let v = exact_length(4);
        let err = v.validate("abc").unwrap_err();
        assert_eq!(err.code, "exact_length");
        assert_eq!(err.message, "must be exactly 4 characters");
    }

    use std::fmt::Display;

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        AtLeast<T: PartialOrd + Display + Copy> { min: T } for T;
        rule(self, input) { *input >= self.min }
        error(self, input) {
            ValidationError::new("at_least", format!("must be >= {}", self.min))
        }
        fn at_least(value: T);
    }

    #[test]
    fn generic_validator() {
        let v = at_least(5_i64);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&4).is_err());
    }

    validator! {
        NonEmptySlice<T> for [T];
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::new("non_empty", "must not be empty") }
        fn non_empty_slice();
    }

    #[test]
    fn phantom_unit_validator() {
        let v = non_empty_slice::<u8>();
        assert!(v.validate(&[1, 2]).is_ok());
        assert!(v.validate(&[]).is_err());
    }

    validator! {
        SliceMax<T> { max: usize } for [T];
        rule(self, input) { input.len() <= self.max }
        error(self, input) {
            ValidationError::new("slice_max", format!("at most {} elements allowed", self.max))
        }
        fn slice_max(max: usize);
    }

    #[test]
    fn phantom_struct_validator() {
        let v = slice_max::<i32>(2);
        assert!(v.validate(&[1, 2]).is_ok());
        assert!(v.validate(&[1, 2, 3]).is_err());
    }

    #[test]
    fn compose_chains_with_and() {
        use crate::foundation::ValidateExt;
        let v = compose![exact_length(3), NoWhitespace];
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("a c").is_err());
        assert!(v.validate("ab").is_err());
    }
}
