//! # Lite Log
//!
//! Level-gated, tagged logging helpers on top of `tracing`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lite_log::LogLevel;
//!
//! fn main() -> lite_log::LogResult<()> {
//!     let _guard = lite_log::init()?;
//!     lite_log::add_level(LogLevel::All);
//!
//!     lite_log::info("Startup", "ready");
//!     lite_log::shout("Startup", "boxed banner");
//!     lite_log::json("Startup", r#"{"port":8080}"#);
//!     Ok(())
//! }
//! ```
//!
//! The allow-set gates the tagged calls; the installed `EnvFilter` still
//! decides what reaches the output.

mod builder;
mod config;
mod error;
mod format;
mod gate;
mod level;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard, ReloadHandle};
pub use config::{Config, FALLBACK_LEVEL_VAR, FORMAT_VAR, Format, LEVEL_VAR};
pub use error::{LogError, LogResult};
pub use format::{boxed, error_chain, pretty_json};
pub use gate::{
    DEFAULT_BOUNDARY, LevelGate, WRONG_JSON, add_level, add_levels, clear_levels, contains_level,
    debug, error, exception, global, info, json, remove_level, shout, verbose, warn, wtf,
};
pub use level::{LevelSet, LogLevel};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
///
/// # Errors
/// See [`LoggerBuilder::build`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    let env_set = std::env::var(LEVEL_VAR).is_ok()
        || std::env::var(FALLBACK_LEVEL_VAR).is_ok();

    if env_set {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize from environment variables
///
/// # Errors
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Initialize with custom configuration
///
/// # Errors
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
