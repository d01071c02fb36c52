//! Ordered rule lists
//!
//! [`Rules`] holds the rules of a [`Validator`](crate::Validator) without the
//! subject, so one list can be prepared once and evaluated against many
//! strings.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationErrors, ValidationResultMulti};

/// A rule as stored in a [`Rules`] list.
pub type SharedRule = Arc<dyn Validate<Input = str> + Send + Sync>;

/// Whether evaluation stops at the first failing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Run every rule and report every failure.
    #[default]
    CollectAll,
    /// Stop at the first failure and report only it.
    FailFast,
}

/// An ordered list of rules over `str`.
///
/// Cloning is cheap: rules are shared.
///
/// # Examples
///
/// ```rust,ignore
/// use lite_validator::prelude::*;
///
/// let rules = Rules::new().with(max_length(10)).with(starts_with("abc"));
/// assert!(rules.check("abcdef").is_ok());
/// assert_eq!(rules.check("xyz-too-long-value").unwrap_err().len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Rules {
    rules: Vec<SharedRule>,
    mode: EvaluationMode,
}

impl Rules {
    /// Creates an empty, collect-all rule list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push<V>(&mut self, rule: V)
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.rules.push(Arc::new(rule));
    }

    /// Appends a rule, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.push(rule);
        self
    }

    /// Sets the evaluation mode.
    pub fn set_mode(&mut self, mode: EvaluationMode) {
        self.mode = mode;
    }

    /// Sets the evaluation mode, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The evaluation mode.
    #[must_use]
    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates every rule against `input`, in registration order.
    ///
    /// In [`EvaluationMode::CollectAll`] every failure is returned; in
    /// [`EvaluationMode::FailFast`] the first failure ends evaluation.
    pub fn check(&self, input: &str) -> ValidationResultMulti<()> {
        let mut errors = ValidationErrors::new();

        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.validate(input) {
                tracing::trace!(index, code = %error.code, "rule failed");
                errors.add(error);
                if self.mode == EvaluationMode::FailFast {
                    break;
                }
            }
        }

        errors.into_result(())
    }

    /// Returns true if `input` passes every rule.
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.rules.iter().all(|rule| rule.is_valid(input))
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("len", &self.rules.len())
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<V> Extend<V> for Rules
where
    V: Validate<Input = str> + Send + Sync + 'static,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for rule in iter {
            self.push(rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::validators::{ends_with, max_length, min_length, starts_with};
    use pretty_assertions::assert_eq;

    fn sample() -> Rules {
        Rules::new()
            .with(max_length(5))
            .with(starts_with("ab"))
            .with(ends_with("yz"))
    }

    #[test]
    fn test_empty_rules_pass() {
        assert!(Rules::new().check("anything").is_ok());
        assert!(Rules::new().is_empty());
    }

    #[test]
    fn test_collect_all_keeps_registration_order() {
        let errors = sample().check("zzzzzzzz").unwrap_err();
        assert_eq!(
            errors.kinds(),
            vec![ErrorKind::MaxLength, ErrorKind::Prefix, ErrorKind::Suffix]
        );
    }

    #[test]
    fn test_check_reports_exactly_the_failing_rules() {
        let rules = sample();
        let input = "abzzzzzz";
        let expected: Vec<ErrorKind> = [
            max_length(5).validate(input).err(),
            starts_with("ab").validate(input).err(),
            ends_with("yz").validate(input).err(),
        ]
        .into_iter()
        .flatten()
        .map(|e| e.kind)
        .collect();
        assert_eq!(rules.check(input).unwrap_err().kinds(), expected);
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let rules = sample().with_mode(EvaluationMode::FailFast);
        let errors = rules.check("abzzzzzz").unwrap_err();
        assert_eq!(errors.kinds(), vec![ErrorKind::MaxLength]);
    }

    #[test]
    fn test_is_valid_matches_check() {
        let rules = sample();
        for input in ["abxyz", "abcyz", "ab", "zzzzzzz"] {
            assert_eq!(rules.is_valid(input), rules.check(input).is_ok(), "{input}");
        }
    }

    #[test]
    fn test_clone_shares_rules() {
        let rules = sample();
        let copy = rules.clone();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.mode(), EvaluationMode::CollectAll);
    }

    #[test]
    fn test_extend() {
        let mut rules = Rules::new();
        rules.extend([min_length(2), min_length(3)]);
        rules.set_mode(EvaluationMode::FailFast);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.check("a").unwrap_err().len(), 1);
    }
}
