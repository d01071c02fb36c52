//! Serializable rule configuration
//!
//! Rule lists can be described in JSON (or any serde format) and compiled
//! into [`Rules`]:
//!
//! ```json
//! {
//!   "mode": "collect_all",
//!   "rules": [
//!     { "rule": "max_length", "max": 14 },
//!     { "rule": "starts_with", "prefix": "abcd" },
//!     { "rule": "at_least_one_special_character" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::rules::{EvaluationMode, Rules};
use crate::validators::{self, LengthMode, MaxLength, MinLength};

/// Errors raised while loading or compiling a rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or does not match the schema.
    #[error("invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A `matches` rule carries a pattern that does not compile.
    #[error("invalid pattern in rule #{index}: {source}")]
    Pattern {
        /// Position of the offending rule.
        index: usize,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// One rule, tagged by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    /// See [`MinLength`].
    MinLength {
        /// Inclusive lower bound.
        min: usize,
        /// How to count.
        #[serde(default)]
        mode: LengthMode,
    },
    /// See [`MaxLength`].
    MaxLength {
        /// Inclusive upper bound.
        max: usize,
        /// How to count.
        #[serde(default)]
        mode: LengthMode,
    },
    /// See [`validators::NonEmpty`].
    NonEmpty,
    /// See [`validators::StartsWith`].
    StartsWith {
        /// Required prefix.
        prefix: String,
    },
    /// See [`validators::EndsWith`].
    EndsWith {
        /// Required suffix.
        suffix: String,
    },
    /// See [`validators::Contains`].
    Contains {
        /// Required substring.
        substring: String,
    },
    /// See [`validators::DoesNotContain`].
    DoesNotContain {
        /// Forbidden substring.
        substring: String,
    },
    /// See [`validators::AtLeastOneSpecialCharacter`].
    AtLeastOneSpecialCharacter,
    /// See [`validators::NoSpecialCharacter`].
    NoSpecialCharacter,
    /// See [`validators::Email`].
    Email,
    /// See [`validators::NoNumbers`].
    NoNumbers,
    /// See [`validators::OnlyNumbers`].
    OnlyNumbers,
    /// See [`validators::AtLeastOneNumber`].
    AtLeastOneNumber,
    /// See [`validators::StartsWithNonNumber`].
    StartsWithNonNumber,
    /// See [`validators::AllUpperCase`].
    AllUpperCase,
    /// See [`validators::AllLowerCase`].
    AllLowerCase,
    /// See [`validators::AtLeastOneLowerCase`].
    AtLeastOneLowerCase,
    /// See [`validators::AtLeastOneUpperCase`].
    AtLeastOneUpperCase,
    /// See [`validators::MatchesRegex`].
    Matches {
        /// Regular expression the subject must match.
        pattern: String,
    },
}

/// A full rule list with its evaluation mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Collect all failures or stop at the first.
    #[serde(default)]
    pub mode: EvaluationMode,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl RulesConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compiles the configuration into a [`Rules`] list.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn build(&self) -> Result<Rules, ConfigError> {
        let mut rules = Rules::new().with_mode(self.mode);

        for (index, rule) in self.rules.iter().enumerate() {
            match rule {
                RuleConfig::MinLength { min, mode } => {
                    rules.push(MinLength { min: *min, mode: *mode });
                }
                RuleConfig::MaxLength { max, mode } => {
                    rules.push(MaxLength { max: *max, mode: *mode });
                }
                RuleConfig::NonEmpty => rules.push(validators::non_empty()),
                RuleConfig::StartsWith { prefix } => {
                    rules.push(validators::starts_with(prefix.as_str()));
                }
                RuleConfig::EndsWith { suffix } => {
                    rules.push(validators::ends_with(suffix.as_str()));
                }
                RuleConfig::Contains { substring } => {
                    rules.push(validators::contains(substring.as_str()));
                }
                RuleConfig::DoesNotContain { substring } => {
                    rules.push(validators::does_not_contain(substring.as_str()));
                }
                RuleConfig::AtLeastOneSpecialCharacter => {
                    rules.push(validators::at_least_one_special_character());
                }
                RuleConfig::NoSpecialCharacter => rules.push(validators::no_special_character()),
                RuleConfig::Email => rules.push(validators::email()),
                RuleConfig::NoNumbers => rules.push(validators::no_numbers()),
                RuleConfig::OnlyNumbers => rules.push(validators::only_numbers()),
                RuleConfig::AtLeastOneNumber => rules.push(validators::at_least_one_number()),
                RuleConfig::StartsWithNonNumber => {
                    rules.push(validators::starts_with_non_number());
                }
                RuleConfig::AllUpperCase => rules.push(validators::all_upper_case()),
                RuleConfig::AllLowerCase => rules.push(validators::all_lower_case()),
                RuleConfig::AtLeastOneLowerCase => {
                    rules.push(validators::at_least_one_lower_case());
                }
                RuleConfig::AtLeastOneUpperCase => {
                    rules.push(validators::at_least_one_upper_case());
                }
                RuleConfig::Matches { pattern } => {
                    let rule = validators::matches_regex(pattern)
                        .map_err(|source| ConfigError::Pattern { index, source })?;
                    rules.push(rule);
                }
            }
        }

        tracing::debug!(rules = rules.len(), mode = ?rules.mode(), "rule configuration compiled");
        Ok(rules)
    }
}

impl Rules {
    /// Parses and compiles a JSON rule configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        RulesConfig::from_json(json)?.build()
    }
}
