//! # lite-validator
//!
//! Fluent string validation with callback or `Result` reporting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lite_validator::prelude::*;
//!
//! let outcome = Validator::new("abcdokokok-saruseth234324xyz")
//!     .at_least_one_special_character()
//!     .maximum_length(14)
//!     .starts_with("abcd")
//!     .ends_with("xyz")
//!     .does_not_contain("sarusethi")
//!     .add_error_callback(|errors| eprintln!("{errors}"))
//!     .add_success_callback(|| println!("Success"))
//!     .validate();
//!
//! assert_eq!(outcome.unwrap_err().kinds(), vec![ErrorKind::MaxLength]);
//! ```
//!
//! ## Building Blocks
//!
//! - [`Validator`]: one subject, chained rules, success/error callbacks
//! - [`Rules`](rules::Rules): a subject-free, shareable rule list
//! - [`RulesConfig`](config::RulesConfig): rule lists loaded from JSON
//! - [`validators`]: the built-in rules, usable on their own through
//!   [`Validate`](foundation::Validate)
//!
//! Use the [`validator!`] macro to define new rules in the same shape as the
//! built-in ones.

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validator;
pub mod validators;

pub use validator::{IntoValidator, Validator, ValidatorState};
