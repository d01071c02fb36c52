//! The fluent `Validator`
//!
//! A [`Validator`] binds one immutable subject string to an ordered list of
//! rules and two optional callbacks. Builder methods consume and return the
//! same value, so a whole check reads as one chain:
//!
//! ```rust,ignore
//! use lite_validator::Validator;
//!
//! let outcome = Validator::new("abcxyz")
//!     .starts_with("abc")
//!     .ends_with("xyz")
//!     .maximum_length(10)
//!     .add_success_callback(|| println!("ok"))
//!     .validate();
//! assert!(outcome.is_ok());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidationErrors, ValidationResultMulti};
use crate::rules::{EvaluationMode, Rules};
use crate::validators;

type ErrorCallback<'a> = Box<dyn FnMut(&ValidationErrors) + 'a>;
type SuccessCallback<'a> = Box<dyn FnMut() + 'a>;

/// Lifecycle of a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidatorState {
    /// Rules and callbacks are being registered.
    #[default]
    Building,
    /// `validate()` has run at least once.
    Validated,
}

/// Checks one subject string against chained rules.
///
/// - Rules run in registration order.
/// - By default every rule runs and all failures are collected; call
///   [`fail_fast`](Self::fail_fast) to stop at the first one.
/// - `validate()` invokes exactly one callback: the error callback once with
///   every collected failure, or the success callback once.
/// - Registering a callback twice replaces the previous one.
pub struct Validator<'a> {
    subject: String,
    rules: Rules,
    on_error: Option<ErrorCallback<'a>>,
    on_success: Option<SuccessCallback<'a>>,
    state: ValidatorState,
}

impl<'a> Validator<'a> {
    /// Creates a validator for `subject` with no rules.
    ///
    /// The empty string is a valid subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self::with_rules(subject, Rules::new())
    }

    /// Creates a validator for `subject` starting from a prepared rule list.
    pub fn with_rules(subject: impl Into<String>, rules: Rules) -> Self {
        Self {
            subject: subject.into(),
            rules,
            on_error: None,
            on_success: None,
            state: ValidatorState::Building,
        }
    }

    /// The string under validation.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The registered rules.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ValidatorState {
        self.state
    }

    // ------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------

    /// Appends any rule over `str`.
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.rules.push(rule);
        self
    }

    /// Appends a closure-backed rule reported as a custom error.
    pub fn check<F>(
        self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(validators::predicate(code, message, check))
    }

    /// Fails if the subject has more than `length` chars.
    pub fn maximum_length(self, length: usize) -> Self {
        self.rule(validators::max_length(length))
    }

    /// Fails if the subject has fewer than `length` chars.
    pub fn minimum_length(self, length: usize) -> Self {
        self.rule(validators::min_length(length))
    }

    /// Fails if the subject is empty.
    pub fn non_empty(self) -> Self {
        self.rule(validators::non_empty())
    }

    /// Fails unless the subject starts with `prefix`.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.rule(validators::starts_with(prefix))
    }

    /// Fails unless the subject ends with `suffix`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.rule(validators::ends_with(suffix))
    }

    /// Fails unless `substring` occurs in the subject.
    pub fn contains(self, substring: impl Into<String>) -> Self {
        self.rule(validators::contains(substring))
    }

    /// Fails if `substring` occurs in the subject.
    pub fn does_not_contain(self, substring: impl Into<String>) -> Self {
        self.rule(validators::does_not_contain(substring))
    }

    /// Fails if every char of the subject is in `[A-Za-z0-9]`.
    pub fn at_least_one_special_character(self) -> Self {
        self.rule(validators::at_least_one_special_character())
    }

    /// Fails if any char of the subject is outside `[A-Za-z0-9]`.
    pub fn no_special_character(self) -> Self {
        self.rule(validators::no_special_character())
    }

    /// Fails unless the subject is an email address.
    pub fn email(self) -> Self {
        self.rule(validators::email())
    }

    /// Fails if the subject contains a digit.
    pub fn no_numbers(self) -> Self {
        self.rule(validators::no_numbers())
    }

    /// Fails unless the subject is one or more digits.
    pub fn only_numbers(self) -> Self {
        self.rule(validators::only_numbers())
    }

    /// Fails unless the subject contains a digit.
    pub fn at_least_one_number(self) -> Self {
        self.rule(validators::at_least_one_number())
    }

    /// Fails if the subject is empty or starts with a digit.
    pub fn starts_with_non_number(self) -> Self {
        self.rule(validators::starts_with_non_number())
    }

    /// Fails if the subject has a lowercase letter.
    pub fn all_upper_case(self) -> Self {
        self.rule(validators::all_upper_case())
    }

    /// Fails if the subject has an uppercase letter.
    pub fn all_lower_case(self) -> Self {
        self.rule(validators::all_lower_case())
    }

    /// Fails unless the subject has a lowercase letter.
    pub fn at_least_one_lower_case(self) -> Self {
        self.rule(validators::at_least_one_lower_case())
    }

    /// Fails unless the subject has an uppercase letter.
    pub fn at_least_one_upper_case(self) -> Self {
        self.rule(validators::at_least_one_upper_case())
    }

    /// Fails unless the subject matches `pattern`.
    ///
    /// An invalid pattern is a construction error, returned immediately.
    pub fn matches(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.rule(validators::matches_regex(pattern)?))
    }

    /// Stops evaluation at the first failing rule.
    pub fn fail_fast(mut self) -> Self {
        self.rules.set_mode(EvaluationMode::FailFast);
        self
    }

    // ------------------------------------------------------------------
    // Callbacks
    // ------------------------------------------------------------------

    /// Sets the handler invoked with all failures when validation fails.
    pub fn add_error_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ValidationErrors) + 'a,
    {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Sets the handler invoked when validation passes.
    pub fn add_success_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'a,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    /// Runs every rule against the subject and dispatches one callback.
    ///
    /// Returns the same outcome the callbacks observed. Calling it again
    /// re-runs the rules and re-invokes the matching callback.
    pub fn validate(&mut self) -> ValidationResultMulti<()> {
        let result = self.rules.check(&self.subject);
        self.state = ValidatorState::Validated;

        match &result {
            Ok(()) => {
                tracing::debug!(rules = self.rules.len(), "validation passed");
                if let Some(callback) = self.on_success.as_mut() {
                    callback();
                }
            }
            Err(errors) => {
                tracing::debug!(
                    rules = self.rules.len(),
                    failed = errors.len(),
                    "validation failed"
                );
                if let Some(callback) = self.on_error.as_mut() {
                    callback(errors);
                }
            }
        }

        result
    }

    /// Returns true if the subject passes every rule.
    ///
    /// Does not invoke callbacks or change state.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rules.is_valid(&self.subject)
    }
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("subject", &self.subject)
            .field("rules", &self.rules)
            .field("on_error", &self.on_error.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("state", &self.state)
            .finish()
    }
}

// ============================================================================
// ENTRY POINT ON STRINGS
// ============================================================================

/// Starts a [`Validator`] chain from a string value.
///
/// ```rust,ignore
/// use lite_validator::IntoValidator;
///
/// assert!("user@example.com".validator().email().validate().is_ok());
/// ```
pub trait IntoValidator {
    /// Creates a validator whose subject is a copy of `self`.
    fn validator<'a>(&self) -> Validator<'a>;
}

impl IntoValidator for str {
    fn validator<'a>(&self) -> Validator<'a> {
        Validator::new(self)
    }
}
