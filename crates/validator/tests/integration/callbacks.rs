//! Callback dispatch semantics.

use std::cell::{Cell, RefCell};

use lite_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn error_callback_fires_once_with_all_failures() {
    let calls = Cell::new(0);
    let seen = RefCell::new(Vec::new());
    let success = Cell::new(false);

    let outcome = Validator::new("abcdokokok-saruseth234324xyz")
        .maximum_length(14)
        .does_not_contain("saruseth")
        .add_error_callback(|errors| {
            calls.set(calls.get() + 1);
            seen.borrow_mut().extend(errors.kinds());
        })
        .add_success_callback(|| success.set(true))
        .validate();

    assert!(outcome.is_err());
    assert_eq!(calls.get(), 1);
    assert!(!success.get());
    assert_eq!(
        *seen.borrow(),
        vec![ErrorKind::MaxLength, ErrorKind::ForbiddenSubstring]
    );
}

#[test]
fn success_callback_fires_once_and_error_callback_never() {
    let successes = Cell::new(0);
    let errors = Cell::new(0);

    Validator::new("abcxyz")
        .starts_with("abc")
        .ends_with("xyz")
        .maximum_length(10)
        .add_error_callback(|_| errors.set(errors.get() + 1))
        .add_success_callback(|| successes.set(successes.get() + 1))
        .validate()
        .unwrap();

    assert_eq!(successes.get(), 1);
    assert_eq!(errors.get(), 0);
}

#[test]
fn validation_without_callbacks_still_returns_outcome() {
    assert!(Validator::new("").non_empty().validate().is_err());
    assert!(Validator::new("x").non_empty().validate().is_ok());
}

#[test]
fn callback_may_own_its_state() {
    let log = std::rc::Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = std::rc::Rc::clone(&log);

    let mut validator = Validator::new("nope")
        .email()
        .add_error_callback(move |errors| {
            sink.borrow_mut()
                .extend(errors.iter().map(|e| e.code.to_string()));
        });
    validator.validate().unwrap_err();
    validator.validate().unwrap_err();

    assert_eq!(*log.borrow(), vec!["email".to_string(), "email".to_string()]);
    assert_eq!(validator.state(), ValidatorState::Validated);
}
