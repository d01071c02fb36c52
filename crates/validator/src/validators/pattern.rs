//! Literal substring validators
//!
//! All matching is literal and case-sensitive.

use crate::foundation::{ErrorKind, ValidationError};

crate::validator! {
    /// Validates that a string contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    rule(self, input) { input.contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new(
            ErrorKind::RequiredSubstring,
            format!("String must contain '{}'", self.substring),
        )
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::validator! {
    /// Validates that a string does not contain a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub DoesNotContain { substring: String } for str;
    rule(self, input) { !input.contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new(
            ErrorKind::ForbiddenSubstring,
            format!("String must not contain '{}'", self.substring),
        )
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn does_not_contain(substring: impl Into<String>);
}

crate::validator! {
    /// Validates that a string starts with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new(
            ErrorKind::Prefix,
            format!("String must start with '{}'", self.prefix),
        )
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new(
            ErrorKind::Suffix,
            format!("String must end with '{}'", self.suffix),
        )
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string is non-empty and its first char is not an ASCII digit.
    pub StartsWithNonNumber for str;
    rule(input) { input.chars().next().is_some_and(|c| !c.is_ascii_digit()) }
    error(input) {
        ValidationError::new(ErrorKind::StartsWithNonNumber, "String must not start with a number")
    }
    fn starts_with_non_number();
}
