//! Character-class validators
//!
//! A "special character" is any char outside `[A-Za-z0-9]`; non-ASCII
//! letters count as special. Digits are ASCII `0-9`. Case checks use
//! Unicode case mapping.

use crate::foundation::{ErrorKind, ValidationError};

#[inline]
fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

// ============================================================================
// SPECIAL CHARACTERS
// ============================================================================

crate::validator! {
    /// Validates that a string has at least one char outside `[A-Za-z0-9]`.
    ///
    /// The empty string fails.
    pub AtLeastOneSpecialCharacter for str;
    rule(input) { input.chars().any(is_special) }
    error(input) {
        ValidationError::new(
            ErrorKind::MissingSpecialChar,
            "String must contain at least one special character",
        )
    }
    fn at_least_one_special_character();
}

crate::validator! {
    /// Validates that every char of a string is in `[A-Za-z0-9]`.
    pub NoSpecialCharacter for str;
    rule(input) { !input.chars().any(is_special) }
    error(input) {
        ValidationError::new(
            ErrorKind::NoSpecialChar,
            "String must contain only letters and numbers",
        )
    }
    fn no_special_character();
}

// ============================================================================
// DIGITS
// ============================================================================

crate::validator! {
    /// Validates that a string contains no digits.
    pub NoNumbers for str;
    rule(input) { !input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new(ErrorKind::NoNumbers, "String must not contain numbers") }
    fn no_numbers();
}

crate::validator! {
    /// Validates that a string is non-empty and made of digits only.
    pub OnlyNumbers for str;
    rule(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new(ErrorKind::OnlyNumbers, "String must contain only numbers") }
    fn only_numbers();
}

crate::validator! {
    /// Validates that a string contains at least one digit.
    pub AtLeastOneNumber for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) {
        ValidationError::new(ErrorKind::AtLeastOneNumber, "String must contain at least one number")
    }
    fn at_least_one_number();
}

// ============================================================================
// CASE
// ============================================================================

crate::validator! {
    /// Validates that uppercasing the string leaves it unchanged.
    pub AllUpperCase for str;
    rule(input) { input.to_uppercase() == input }
    error(input) { ValidationError::new(ErrorKind::AllUpperCase, "String must be uppercase") }
    fn all_upper_case();
}

crate::validator! {
    /// Validates that lowercasing the string leaves it unchanged.
    pub AllLowerCase for str;
    rule(input) { input.to_lowercase() == input }
    error(input) { ValidationError::new(ErrorKind::AllLowerCase, "String must be lowercase") }
    fn all_lower_case();
}

crate::validator! {
    /// Validates that a string has at least one lowercase letter.
    pub AtLeastOneLowerCase for str;
    rule(input) { input.chars().any(char::is_lowercase) }
    error(input) {
        ValidationError::new(
            ErrorKind::AtLeastOneLowerCase,
            "String must contain at least one lowercase letter",
        )
    }
    fn at_least_one_lower_case();
}

crate::validator! {
    /// Validates that a string has at least one uppercase letter.
    pub AtLeastOneUpperCase for str;
    rule(input) { input.chars().any(char::is_uppercase) }
    error(input) {
        ValidationError::new(
            ErrorKind::AtLeastOneUpperCase,
            "String must contain at least one uppercase letter",
        )
    }
    fn at_least_one_upper_case();
}
