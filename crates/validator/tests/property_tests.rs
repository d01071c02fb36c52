//! Property-based tests for lite-validator.

use lite_validator::prelude::*;
use proptest::prelude::*;

fn fails(rule: impl Validate<Input = str>, s: &str) -> bool {
    rule.validate(s).is_err()
}

// ============================================================================
// RULE DEFINITIONS
// ============================================================================

proptest! {
    #[test]
    fn maximum_length_fails_iff_longer(s in ".{0,40}", limit in 0usize..40) {
        prop_assert_eq!(fails(max_length(limit), &s), s.chars().count() > limit);
    }

    #[test]
    fn starts_with_fails_iff_not_prefix(s in "[a-cA-C]{0,8}", p in "[a-cA-C]{0,3}") {
        prop_assert_eq!(fails(starts_with(p.as_str()), &s), !s.starts_with(p.as_str()));
    }

    #[test]
    fn ends_with_fails_iff_not_suffix(s in "[a-c]{0,8}", q in "[a-c]{0,3}") {
        prop_assert_eq!(fails(ends_with(q.as_str()), &s), !s.ends_with(q.as_str()));
    }

    #[test]
    fn does_not_contain_fails_iff_present(s in "[a-c]{0,10}", t in "[a-c]{1,3}") {
        prop_assert_eq!(fails(does_not_contain(t.as_str()), &s), s.contains(t.as_str()));
    }

    #[test]
    fn special_character_fails_iff_all_alphanumeric(s in "[a-zA-Z0-9_!é ]{0,12}") {
        let all_alnum = s.chars().all(|c| c.is_ascii_alphanumeric());
        prop_assert_eq!(fails(at_least_one_special_character(), &s), all_alnum);
    }
}

// ============================================================================
// VALIDATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn validate_is_idempotent(s in ".{0,20}") {
        let mut v = Validator::new(s.as_str()).maximum_length(8).at_least_one_number();
        let first = v.validate();
        let second = v.validate();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn collect_all_reports_every_failing_rule(s in ".{0,20}") {
        let errors = Validator::new(s.as_str())
            .maximum_length(5)
            .starts_with("a")
            .no_numbers()
            .validate()
            .err()
            .map(|e| e.len())
            .unwrap_or(0);
        let expected = [
            fails(max_length(5), &s),
            fails(starts_with("a"), &s),
            fails(no_numbers(), &s),
        ]
        .into_iter()
        .filter(|f| *f)
        .count();
        prop_assert_eq!(errors, expected);
    }

    #[test]
    fn is_valid_agrees_with_validate(s in ".{0,20}") {
        let mut v = Validator::new(s.as_str()).minimum_length(3).ends_with("z");
        prop_assert_eq!(v.is_valid(), v.validate().is_ok());
    }
}
