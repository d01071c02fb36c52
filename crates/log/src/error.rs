//! Error types for logger setup and formatting

use thiserror::Error;

/// Errors raised by logger setup and by the JSON formatter.
#[derive(Error, Debug)]
pub enum LogError {
    /// The filter directive string could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// Logger configuration or runtime reload failed.
    #[error("logger configuration error: {0}")]
    Config(String),

    /// A global subscriber is already installed.
    #[error("a global logger is already installed")]
    AlreadyInitialized,

    /// Input handed to the JSON formatter is not valid JSON.
    #[error("wrong JSON format: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> LogResult<serde_json::Value> {
        Ok(serde_json::from_str(input)?)
    }

    #[test]
    fn test_json_errors_convert_into_log_result() {
        assert!(parse("{}").is_ok());
        let err = parse("{oops").unwrap_err();
        assert!(matches!(err, LogError::Json(_)));
        assert!(err.to_string().starts_with("wrong JSON format"));
    }
}
