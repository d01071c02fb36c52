//! Logger configuration
//!
//! - `Config`/`Format`: what the installed subscriber looks like
//! - `presets`: environment parsing and ready-made setups

mod presets;

pub use presets::{FALLBACK_LEVEL_VAR, FORMAT_VAR, LEVEL_VAR};

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive string (e.g. `"info"`, `"debug,lite_validator=trace"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// ANSI colours in the output
    pub colors: bool,

    /// Timestamp on each line
    pub time: bool,

    /// Keep a handle that can swap the filter at runtime
    pub reloadable: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Compact single-line output
    Compact,
    /// Structured JSON output
    Json,
}

impl Format {
    /// Parses a format name, falling back to `Compact` for unknown names.
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            colors: true,
            time: true,
            reloadable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case(" compact ", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn test_parse_format(#[case] name: &str, #[case] expected: Format) {
        assert_eq!(Format::parse_lossy(name), expected);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"level":"debug","format":"json"}"#).unwrap();
        assert_eq!(
            config,
            Config {
                level: "debug".to_string(),
                format: Format::Json,
                ..Config::default()
            }
        );
    }
}
