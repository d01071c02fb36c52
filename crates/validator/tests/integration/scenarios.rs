//! End-to-end validation scenarios.

use lite_validator::prelude::*;
use pretty_assertions::assert_eq;

const SUBJECT: &str = "abcdokokok-saruseth234324xyz";

#[test]
fn long_subject_fails_only_on_maximum_length() {
    let errors = Validator::new(SUBJECT)
        .at_least_one_special_character()
        .maximum_length(14)
        .starts_with("abcd")
        .ends_with("xyz")
        .does_not_contain("sarusethi")
        .validate()
        .unwrap_err();

    // "sarusethi" is not a substring: the subject has "saruseth2".
    assert_eq!(errors.kinds(), vec![ErrorKind::MaxLength]);
    let error = errors.first().unwrap();
    assert_eq!(error.param("max"), Some("14"));
    assert_eq!(error.param("actual"), Some("28"));
}

#[test]
fn exact_forbidden_substring_is_reported_after_length() {
    let errors = Validator::new(SUBJECT)
        .maximum_length(14)
        .does_not_contain("saruseth")
        .validate()
        .unwrap_err();

    assert_eq!(
        errors.kinds(),
        vec![ErrorKind::MaxLength, ErrorKind::ForbiddenSubstring]
    );
    assert_eq!(errors.errors()[1].param("substring"), Some("saruseth"));
}

#[test]
fn short_subject_passes_every_rule() {
    let outcome = Validator::new("abcxyz")
        .starts_with("abc")
        .ends_with("xyz")
        .maximum_length(10)
        .validate();
    assert_eq!(outcome, Ok(()));
}

#[test]
fn registration_order_changes_report_order_only() {
    let forward = Validator::new("zz")
        .starts_with("a")
        .ends_with("b")
        .minimum_length(3)
        .validate()
        .unwrap_err();
    let backward = Validator::new("zz")
        .minimum_length(3)
        .ends_with("b")
        .starts_with("a")
        .validate()
        .unwrap_err();

    let mut a = forward.kinds();
    let mut b = backward.kinds();
    assert_ne!(a, b);
    a.sort_by_key(|k| k.code());
    b.sort_by_key(|k| k.code());
    assert_eq!(a, b);
}

#[test]
fn fail_fast_reports_first_failure_only() {
    let errors = Validator::new(SUBJECT)
        .maximum_length(14)
        .does_not_contain("saruseth")
        .fail_fast()
        .validate()
        .unwrap_err();
    assert_eq!(errors.kinds(), vec![ErrorKind::MaxLength]);
}

#[test]
fn password_policy_from_supplementary_rules() {
    let check = |password: &str| {
        Validator::new(password)
            .minimum_length(8)
            .at_least_one_number()
            .at_least_one_upper_case()
            .at_least_one_lower_case()
            .at_least_one_special_character()
            .starts_with_non_number()
            .validate()
    };

    assert!(check("Secr3t!pass").is_ok());
    let errors = check("1password").unwrap_err();
    assert_eq!(
        errors.kinds(),
        vec![
            ErrorKind::AtLeastOneUpperCase,
            ErrorKind::MissingSpecialChar,
            ErrorKind::StartsWithNonNumber,
        ]
    );
}

#[test]
fn shared_rules_validate_many_subjects() {
    let rules = Rules::new().with(email()).with(max_length(20));
    let results: Vec<bool> = ["a@b.io", "not-an-email", "very.long.name@example.com"]
        .into_iter()
        .map(|s| Validator::with_rules(s, rules.clone()).validate().is_ok())
        .collect();
    assert_eq!(results, vec![true, false, false]);
}

#[test]
fn config_and_builder_agree() {
    let from_config = Rules::from_json(
        r#"{ "rules": [
            { "rule": "at_least_one_special_character" },
            { "rule": "max_length", "max": 14 },
            { "rule": "starts_with", "prefix": "abcd" },
            { "rule": "ends_with", "suffix": "xyz" },
            { "rule": "does_not_contain", "substring": "sarusethi" }
        ] }"#,
    )
    .unwrap();

    let by_config = Validator::with_rules(SUBJECT, from_config).validate();
    let by_builder = Validator::new(SUBJECT)
        .at_least_one_special_character()
        .maximum_length(14)
        .starts_with("abcd")
        .ends_with("xyz")
        .does_not_contain("sarusethi")
        .validate();
    assert_eq!(by_config, by_builder);
}

#[test]
fn errors_serialize_for_reporting() {
    let errors = Validator::new("abc").maximum_length(2).validate().unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["kind"], "max_length");
    assert_eq!(json[0]["params"]["max"], "2");
}
