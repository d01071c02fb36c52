//! Macros for creating rules with minimal boilerplate.
//!
//! [`validator!`] generates a complete rule: struct definition, `Validate`
//! implementation, constructor, and factory function.
//!
//! # Examples
//!
//! ```rust,ignore
//! use lite_validator::validator;
//! use lite_validator::foundation::{ErrorKind, ValidationError};
//!
//! // Unit rule (no fields)
//! validator! {
//!     pub NonEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     error(input) { ValidationError::new(ErrorKind::NonEmpty, "must not be empty") }
//!     fn non_empty();
//! }
//!
//! // Rule with fields and a custom constructor
//! validator! {
//!     #[derive(PartialEq, Eq, Hash)]
//!     pub StartsWith { prefix: String } for str;
//!     rule(self, input) { input.starts_with(&self.prefix) }
//!     error(self, input) { ValidationError::new(ErrorKind::Prefix, "bad prefix") }
//!     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
//!     fn starts_with(prefix: impl Into<String>);
//! }
//! ```

/// Creates a complete rule: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// Unit rules always derive `Debug, Clone, Copy, PartialEq, Eq, Hash`.
/// Rules with fields always derive `Debug, Clone`; add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NonEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new(ErrorKind::NonEmpty, "empty") }
///     fn non_empty();
/// }
/// ```
///
/// **Rule with fields** (custom `new`):
/// ```rust,ignore
/// validator! {
///     pub MaxLength { max: usize, mode: LengthMode } for str;
///     rule(self, input) { self.mode.measure(input) <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
///     new(max: usize) { Self { max, mode: LengthMode::Chars } }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format(ErrorKind::Pattern, "regex") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit rule (no fields) + factory fn ───────────────────────────────
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

    // ── Unit rule (no fields), no factory ────────────────────────────────
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

    // ── Rule with fields + custom new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Rule with fields + custom new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
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

    // ── Rule with fields + fallible new + fallible factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };
}
