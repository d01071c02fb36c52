//! Configuration presets for common scenarios

use super::{Config, Format};

/// Filter variable checked first.
pub const LEVEL_VAR: &str = "LITE_LOG";
/// Filter variable checked when [`LEVEL_VAR`] is unset.
pub const FALLBACK_LEVEL_VAR: &str = "RUST_LOG";
/// Format variable (`pretty`, `compact` or `json`).
pub const FORMAT_VAR: &str = "LITE_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    #[must_use]
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_VAR).or_else(|| lookup(FALLBACK_LEVEL_VAR)) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = Format::parse_lossy(&format);
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            colors: true,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            colors: false,
            ..Self::default()
        }
    }

    /// Test configuration (no colours, no timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            colors: false,
            time: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_env_is_default() {
        assert_eq!(Config::from_env_with(lookup(&[])), Config::default());
    }

    #[test]
    fn test_lite_log_wins_over_rust_log() {
        let config = Config::from_env_with(lookup(&[(LEVEL_VAR, "trace"), (FALLBACK_LEVEL_VAR, "warn")]));
        assert_eq!(config.level, "trace");

        let config = Config::from_env_with(lookup(&[(FALLBACK_LEVEL_VAR, "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn test_format_from_env() {
        let config = Config::from_env_with(lookup(&[(FORMAT_VAR, "json")]));
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert!(!Config::production().colors);
        assert!(!Config::test().time);
    }
}
