//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`], [`ValidationErrors`]
//!
//! Everything else in the crate is built from these: built-in rules implement
//! [`Validate`], [`Rules`](crate::rules::Rules) evaluates a list of them, and
//! [`Validator`](crate::Validator) binds a list to a subject.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ErrorParams, ValidationError, ValidationErrors};
pub use traits::Validate;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
