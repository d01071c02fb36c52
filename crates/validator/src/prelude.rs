//! Prelude module for convenient imports.
//!
//! Provides a single `use lite_validator::prelude::*;` import that brings
//! in the validator, the rule list, errors, and every built-in rule.

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATOR, RULES, CONFIG
// ============================================================================

pub use crate::config::{ConfigError, RuleConfig, RulesConfig};
pub use crate::rules::{EvaluationMode, Rules};
pub use crate::validator::{IntoValidator, Validator, ValidatorState};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
