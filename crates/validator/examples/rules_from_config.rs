//! Loading a shared rule list from JSON and applying it to several subjects

use lite_log::LogLevel;
use lite_validator::prelude::*;

const TAG: &str = "RulesFromConfig";

const PASSWORD_POLICY: &str = r#"{
    "mode": "collect_all",
    "rules": [
        { "rule": "min_length", "min": 8 },
        { "rule": "max_length", "max": 64 },
        { "rule": "at_least_one_upper_case" },
        { "rule": "at_least_one_lower_case" },
        { "rule": "at_least_one_number" },
        { "rule": "at_least_one_special_character" },
        { "rule": "starts_with_non_number" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = lite_log::init_with(lite_log::Config::development())?;
    lite_log::add_level(LogLevel::All);
    lite_log::json(TAG, PASSWORD_POLICY);

    let policy = Rules::from_json(PASSWORD_POLICY)?;

    for candidate in ["hunter2", "1Password!", "Correct-Horse-9"] {
        let outcome = Validator::with_rules(candidate, policy.clone())
            .add_error_callback(|errors| {
                let summary = serde_json::to_string(errors).unwrap_or_default();
                lite_log::warn(TAG, format!("{candidate} rejected: {summary}"));
            })
            .add_success_callback(|| {
                lite_log::info(TAG, format!("{candidate} accepted"));
            })
            .validate();

        if outcome.is_err() {
            lite_log::debug(TAG, format!("{candidate} needs another try"));
        }
    }

    if let Err(err) = Rules::from_json(r#"{ "rules": [ { "rule": "matches", "pattern": "(" } ] }"#) {
        lite_log::exception(TAG, &err);
    }

    Ok(())
}
