//! Basic usage example for lite-validator
//!
//! Run with `LITE_LOG=debug` to see the validator's own events.

use lite_log::LogLevel;
use lite_validator::prelude::*;

const TAG: &str = "BasicUsage";

fn main() -> Result<(), lite_log::LogError> {
    let _guard = lite_log::init()?;
    lite_log::add_level(LogLevel::All);

    let outcome = Validator::new("abcdokokok-saruseth234324xyz")
        .at_least_one_special_character()
        .maximum_length(14)
        .starts_with("abcd")
        .ends_with("xyz")
        .does_not_contain("sarusethi")
        .add_error_callback(|errors| {
            for error in errors {
                lite_log::error(TAG, error);
            }
        })
        .add_success_callback(|| {
            lite_log::info(TAG, "Success");
        })
        .validate();

    if let Err(errors) = &outcome {
        let report = errors.to_string();
        lite_log::shout(TAG, &report);
    }

    "abcxyz"
        .validator()
        .starts_with("abc")
        .ends_with("xyz")
        .maximum_length(10)
        .add_success_callback(|| {
            lite_log::info(TAG, "abcxyz passed");
        })
        .validate()
        .ok();

    Ok(())
}
