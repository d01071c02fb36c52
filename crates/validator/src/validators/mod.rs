//! Built-in validators
//!
//! Every rule here validates `str`, is a small `Clone` struct, and has a
//! lowercase factory function of the same name.
//!
//! # Categories
//!
//! - **Length**: non-empty, minimum, maximum
//! - **Pattern**: literal prefix, suffix, required or forbidden substring
//! - **Charset**: special characters, digits, letter case
//! - **Content**: email, regular expression
//! - **Custom**: closures
//!
//! # Examples
//!
//! ```rust,ignore
//! use lite_validator::prelude::*;
//!
//! let username = min_length(3);
//! assert!(username.validate("alice").is_ok());
//! ```

pub mod charset;
pub mod content;
pub mod custom;
pub mod length;
pub mod pattern;

pub use charset::{
    AllLowerCase, AllUpperCase, AtLeastOneLowerCase, AtLeastOneNumber,
    AtLeastOneSpecialCharacter, AtLeastOneUpperCase, NoNumbers, NoSpecialCharacter, OnlyNumbers,
    all_lower_case, all_upper_case, at_least_one_lower_case, at_least_one_number,
    at_least_one_special_character, at_least_one_upper_case, no_numbers, no_special_character,
    only_numbers,
};

pub use content::{Email, MatchesRegex, email, matches_regex};

pub use custom::{Predicate, predicate};

pub use length::{LengthMode, MaxLength, MinLength, NonEmpty, max_length, min_length, non_empty};

pub use pattern::{
    Contains, DoesNotContain, EndsWith, StartsWith, StartsWithNonNumber, contains,
    does_not_contain, ends_with, starts_with, starts_with_non_number,
};
