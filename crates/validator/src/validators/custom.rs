//! Closure-backed rules

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidationError};

/// A rule built from a plain `Fn(&str) -> bool`.
///
/// Failures are reported as [`ErrorKind::Custom`](crate::foundation::ErrorKind::Custom)
/// with the given code and message.
///
/// # Examples
///
/// ```rust,ignore
/// use lite_validator::validators::predicate;
///
/// let no_spaces = predicate("no_spaces", "Spaces are not allowed", |s| !s.contains(' '));
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    check: F,
}

impl<F> Predicate<F>
where
    F: Fn(&str) -> bool,
{
    /// Creates a new closure-backed rule.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            check,
        }
    }

    /// The error code reported on failure.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&str) -> bool,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(ValidationError::custom(self.code.clone(), self.message.clone()))
        }
    }
}

/// Creates a closure-backed rule.
pub fn predicate<F>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    check: F,
) -> Predicate<F>
where
    F: Fn(&str) -> bool,
{
    Predicate::new(code, message, check)
}
