//! Error types for validation failures
//!
//! A failed rule produces one [`ValidationError`]. A full evaluation of a
//! [`Rules`](crate::rules::Rules) list produces a [`ValidationErrors`]
//! collection in rule registration order.
//!
//! Code and message use `Cow<'static, str>` so the common case of static
//! text never allocates.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Ordered key/value parameters of a failed rule (typically 1-2 entries).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Which rule was violated.
///
/// Every built-in rule maps to exactly one kind. Rules registered from
/// closures or third-party [`Validate`](crate::foundation::Validate)
/// implementations report [`ErrorKind::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Subject is shorter than the configured minimum.
    MinLength,
    /// Subject is longer than the configured maximum.
    MaxLength,
    /// Subject does not start with the expected prefix.
    Prefix,
    /// Subject does not end with the expected suffix.
    Suffix,
    /// Subject contains a forbidden substring.
    ForbiddenSubstring,
    /// Subject is missing a required substring.
    RequiredSubstring,
    /// Subject has no character outside `[A-Za-z0-9]`.
    MissingSpecialChar,
    /// Subject has a character outside `[A-Za-z0-9]`.
    NoSpecialChar,
    /// Subject is empty.
    NonEmpty,
    /// Subject is not an email address.
    Email,
    /// Subject contains a digit.
    NoNumbers,
    /// Subject is not made of digits only.
    OnlyNumbers,
    /// Subject has a lowercase letter.
    AllUpperCase,
    /// Subject has an uppercase letter.
    AllLowerCase,
    /// Subject has no lowercase letter.
    AtLeastOneLowerCase,
    /// Subject has no uppercase letter.
    AtLeastOneUpperCase,
    /// Subject has no digit.
    AtLeastOneNumber,
    /// Subject is empty or begins with a digit.
    StartsWithNonNumber,
    /// Subject does not match a regular expression.
    Pattern,
    /// User-defined rule.
    Custom,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling and i18n.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Prefix => "starts_with",
            Self::Suffix => "ends_with",
            Self::ForbiddenSubstring => "does_not_contain",
            Self::RequiredSubstring => "contains",
            Self::MissingSpecialChar => "at_least_one_special_character",
            Self::NoSpecialChar => "no_special_character",
            Self::NonEmpty => "non_empty",
            Self::Email => "email",
            Self::NoNumbers => "no_numbers",
            Self::OnlyNumbers => "only_numbers",
            Self::AllUpperCase => "all_upper_case",
            Self::AllLowerCase => "all_lower_case",
            Self::AtLeastOneLowerCase => "at_least_one_lower_case",
            Self::AtLeastOneUpperCase => "at_least_one_upper_case",
            Self::AtLeastOneNumber => "at_least_one_number",
            Self::StartsWithNonNumber => "starts_with_non_number",
            Self::Pattern => "pattern",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured record of one failed rule.
///
/// # Examples
///
/// ```rust,ignore
/// use lite_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::max_length(14, 28);
/// assert_eq!(error.kind, ErrorKind::MaxLength);
/// assert_eq!(error.param("max"), Some("14"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Which rule failed.
    pub kind: ErrorKind,

    /// Error code for programmatic handling.
    ///
    /// Equal to `kind.code()` for built-in rules; user-chosen for custom ones.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Parameters of the violated rule, in insertion order.
    ///
    /// Example: `[("max", "14"), ("actual", "28")]`
    #[serde(serialize_with = "serialize_params")]
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates an error of the given kind, using the kind's code.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: Cow::Borrowed(kind.code()),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates a [`ErrorKind::Custom`] error with a caller-chosen code.
    pub fn custom(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind: ErrorKind::Custom,
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
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

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value for reporting.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn serialize_params<S>(params: &ErrorParams, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(params.len()))?;
    for (k, v) in params {
        map.serialize_entry(k.as_ref(), v.as_ref())?;
    }
    map.end()
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::MinLength,
            format!("Must be at least {min} characters"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::MaxLength,
            format!("Must be at most {max} characters"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "email" / "pattern" style format error.
    pub fn invalid_format(kind: ErrorKind, expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind, "Invalid format").with_param("expected", expected)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every failure of one evaluation, in rule registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first failure in registration order.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Returns true if any failure has the given kind.
    #[must_use]
    pub fn contains_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Kinds of all failures, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new(ErrorKind::NonEmpty, "String must not be empty");
        assert_eq!(error.code, "non_empty");
        assert_eq!(error.message, "String must not be empty");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_custom_error_keeps_code() {
        let error = ValidationError::custom("no_spaces", "Spaces are not allowed");
        assert_eq!(error.kind, ErrorKind::Custom);
        assert_eq!(error.code, "no_spaces");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::max_length(14, 28);
        assert_eq!(error.kind, ErrorKind::MaxLength);
        assert_eq!(error.param("max"), Some("14"));
        assert_eq!(error.param("actual"), Some("28"));
        assert_eq!(error.param("min"), None);
    }

    #[test]
    fn test_display_lists_params() {
        let error = ValidationError::min_length(5, 3);
        assert_eq!(
            error.to_string(),
            "min_length: Must be at least 5 characters (params: [min=5, actual=3])"
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new(ErrorKind::Email, "Invalid email");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add(ValidationError::max_length(3, 5));
        errors.add(ValidationError::new(ErrorKind::Suffix, "bad suffix"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(errors.first().map(|e| e.kind), Some(ErrorKind::MaxLength));
        assert_eq!(errors.kinds(), vec![ErrorKind::MaxLength, ErrorKind::Suffix]);
        assert!(errors.contains_kind(ErrorKind::Suffix));
        assert!(!errors.contains_kind(ErrorKind::Prefix));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
        let errors: ValidationErrors = std::iter::once(ValidationError::max_length(1, 2)).collect();
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_json_value() {
        let value = ValidationError::max_length(14, 28).to_json_value();
        assert_eq!(value["kind"], "max_length");
        assert_eq!(value["code"], "max_length");
        assert_eq!(value["params"]["max"], "14");
        assert_eq!(value["params"]["actual"], "28");
    }
}
