//! Regex-backed rules: `.email()` and `.matches(pattern)` on a `Validator`,
//! and the `email` / `matches` entries of a rule configuration.

use std::sync::LazyLock;

use crate::foundation::{ErrorKind, ValidationError};

// Local part: RFC 5322 atext plus dots. Domain: dot-separated labels of up
// to 63 alphanumerics/hyphens, not starting or ending with a hyphen. No
// quoted local parts, IP literals or comments.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).expect("email regex is valid")
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the subject matches a regular expression.
    ///
    /// The pattern is unanchored unless it says otherwise, so `\d` passes
    /// any subject containing a digit. The failing pattern is reported in
    /// the `pattern` param.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format(ErrorKind::Pattern, "regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the subject is a plain `local@domain` address.
    ///
    /// A single-label domain (`user@localhost`) is accepted; a trailing dot
    /// or an empty label is not. Failures report `ErrorKind::Email` with
    /// `expected = "email"`.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format(ErrorKind::Email, "email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_regex() {
        let validator = matches_regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(validator.validate("123-4567").is_ok());
        let err = validator.validate("invalid").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Pattern);
        assert_eq!(err.param("pattern"), Some(r"^\d{3}-\d{4}$"));
    }

    #[test]
    fn test_invalid_regex_fails_at_construction() {
        assert!(matches_regex("(unclosed").is_err());
    }

    #[test]
    fn test_email() {
        let validator = email();
        assert!(validator.validate("user@example.com").is_ok());
        assert!(validator.validate("invalid").is_err());
        assert!(validator.validate("@example.com").is_err());
        assert!(validator.validate("user@").is_err());
        assert_eq!(
            validator.validate("nope").unwrap_err().kind,
            ErrorKind::Email
        );
    }

    #[test]
    fn test_email_domain_labels() {
        let validator = email();
        assert!(validator.validate("first.last+tag@sub.example.co").is_ok());
        assert!(validator.validate("user@localhost").is_ok());
        assert!(validator.validate("user@example.").is_err());
        assert!(validator.validate("user@-example.com").is_err());
        assert!(validator.validate("user@exa mple.com").is_err());
    }

    #[test]
    fn test_regex_is_unanchored_by_default() {
        let validator = matches_regex(r"\d").unwrap();
        assert!(validator.validate("abc1").is_ok());
        assert!(validator.validate("abc").is_err());
    }
}
