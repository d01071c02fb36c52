//! Level-gated, tagged log calls
//!
//! A [`LevelGate`] holds an allow-set of [`LogLevel`]s. Its log methods emit
//! a `tracing` event only when the call's level is in the set; the `tag`
//! (usually the calling type's name) is attached as a field.
//!
//! The process-wide gate starts empty, so nothing is logged until a level is
//! enabled:
//!
//! ```rust,ignore
//! lite_log::add_level(lite_log::LogLevel::All);
//! lite_log::info("Checkout", "order placed");
//! ```

use std::error::Error;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::format;
use crate::level::{LevelSet, LogLevel};

/// Default boundary character for [`LevelGate::shout`].
pub const DEFAULT_BOUNDARY: char = '*';

/// Message logged when [`LevelGate::json`] receives malformed input.
pub const WRONG_JSON: &str = "Wrong JSON format. Please check the structure.";

/// An allow-set of log levels plus the log calls it gates.
#[derive(Debug, Default)]
pub struct LevelGate {
    bits: AtomicU8,
}

impl LevelGate {
    /// Creates a gate with no level allowed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(LevelSet::EMPTY.bits()),
        }
    }

    /// Creates a gate allowing exactly `levels`.
    #[must_use]
    pub const fn with_levels(levels: LevelSet) -> Self {
        Self {
            bits: AtomicU8::new(levels.bits()),
        }
    }

    /// Current allow-set.
    #[must_use]
    pub fn levels(&self) -> LevelSet {
        LevelSet::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Allows `level`; `All` allows every level.
    pub fn add_level(&self, level: LogLevel) {
        let bits = LevelSet::EMPTY.with(level).bits();
        self.bits.fetch_or(bits, Ordering::Relaxed);
    }

    /// Allows every level in `levels`.
    pub fn add_levels(&self, levels: &[LogLevel]) {
        let bits = levels.iter().copied().collect::<LevelSet>().bits();
        self.bits.fetch_or(bits, Ordering::Relaxed);
    }

    /// Disallows `level`; `All` disallows every level.
    pub fn remove_level(&self, level: LogLevel) {
        let bits = LevelSet::EMPTY.with(level).bits();
        self.bits.fetch_and(!bits, Ordering::Relaxed);
    }

    /// Returns true if `level` is allowed.
    #[must_use]
    pub fn contains_level(&self, level: LogLevel) -> bool {
        self.levels().contains(level)
    }

    /// Disallows every level.
    pub fn clear_levels(&self) {
        self.bits.store(LevelSet::EMPTY.bits(), Ordering::Relaxed);
    }

    /// Emits `message` at `level` if the level is allowed.
    ///
    /// Returns whether the event was emitted.
    pub fn log(&self, level: LogLevel, tag: &str, message: impl Display) -> bool {
        if level == LogLevel::All || !self.contains_level(level) {
            return false;
        }

        match level {
            LogLevel::Verbose => tracing::trace!(tag, "{message}"),
            LogLevel::Debug => tracing::debug!(tag, "{message}"),
            LogLevel::Info => tracing::info!(tag, "{message}"),
            LogLevel::Warn => tracing::warn!(tag, "{message}"),
            LogLevel::Error => tracing::error!(tag, "{message}"),
            LogLevel::Wtf => tracing::error!(tag, wtf = true, "{message}"),
            LogLevel::All => unreachable!("filtered above"),
        }
        true
    }

    /// Logs at [`LogLevel::Verbose`].
    pub fn verbose(&self, tag: &str, message: impl Display) -> bool {
        self.log(LogLevel::Verbose, tag, message)
    }

    /// Logs at [`LogLevel::Debug`].
    pub fn debug(&self, tag: &str, message: impl Display) -> bool {
        self.log(LogLevel::Debug, tag, message)
    }

    /// Logs at [`LogLevel::Info`].
    pub fn info(&self, tag: &str, message: impl Display) -> bool {
        self.log(LogLevel::Info, tag, message)
    }

    /// Logs at [`LogLevel::Warn`].
    pub fn warn(&self, tag: &str, message: impl Display) -> bool {
        self.log(LogLevel::Warn, tag, message)
    }

    /// Logs at [`LogLevel::Error`].
    pub fn error(&self, tag: &str, message: impl Display) -> bool {
        self.log(LogLevel::Error, tag, message)
    }

    /// Logs at [`LogLevel::Wtf`].
    pub fn wtf(&self, tag: &str, message: impl Display) -> bool {
        self.log(LogLevel::Wtf, tag, message)
    }

    /// Logs `message` boxed by `boundary` at debug level.
    pub fn shout(&self, tag: &str, message: &str, boundary: char) -> bool {
        if !self.contains_level(LogLevel::Debug) {
            return false;
        }
        self.debug(tag, format::boxed(message, boundary))
    }

    /// Pretty-prints a JSON document at debug level.
    ///
    /// Malformed input is reported at error level instead.
    pub fn json(&self, tag: &str, message: &str) -> bool {
        match format::pretty_json(message) {
            Ok(pretty) => self.debug(tag, pretty),
            Err(err) => {
                if !self.contains_level(LogLevel::Error) {
                    return false;
                }
                tracing::error!(tag, error = %err, "{WRONG_JSON}");
                true
            }
        }
    }

    /// Logs an error and its source chain at error level.
    pub fn exception(&self, tag: &str, error: &(dyn Error + 'static)) -> bool {
        if !self.contains_level(LogLevel::Error) {
            return false;
        }
        tracing::error!(tag, error = %format::error_chain(error), "exception");
        true
    }
}

// ============================================================================
// PROCESS-WIDE GATE
// ============================================================================

static GLOBAL: LevelGate = LevelGate::new();

/// The process-wide gate used by the free functions of this crate.
#[must_use]
pub fn global() -> &'static LevelGate {
    &GLOBAL
}

/// Allows `level` on the process-wide gate.
pub fn add_level(level: LogLevel) {
    GLOBAL.add_level(level);
}

/// Allows every level in `levels` on the process-wide gate.
pub fn add_levels(levels: &[LogLevel]) {
    GLOBAL.add_levels(levels);
}

/// Disallows `level` on the process-wide gate.
pub fn remove_level(level: LogLevel) {
    GLOBAL.remove_level(level);
}

/// Returns true if `level` is allowed on the process-wide gate.
#[must_use]
pub fn contains_level(level: LogLevel) -> bool {
    GLOBAL.contains_level(level)
}

/// Disallows every level on the process-wide gate.
pub fn clear_levels() {
    GLOBAL.clear_levels();
}

/// Logs at verbose level through the process-wide gate.
pub fn verbose(tag: &str, message: impl Display) -> bool {
    GLOBAL.verbose(tag, message)
}

/// Logs at debug level through the process-wide gate.
pub fn debug(tag: &str, message: impl Display) -> bool {
    GLOBAL.debug(tag, message)
}

/// Logs at info level through the process-wide gate.
pub fn info(tag: &str, message: impl Display) -> bool {
    GLOBAL.info(tag, message)
}

/// Logs at warn level through the process-wide gate.
pub fn warn(tag: &str, message: impl Display) -> bool {
    GLOBAL.warn(tag, message)
}

/// Logs at error level through the process-wide gate.
pub fn error(tag: &str, message: impl Display) -> bool {
    GLOBAL.error(tag, message)
}

/// Logs at wtf level through the process-wide gate.
pub fn wtf(tag: &str, message: impl Display) -> bool {
    GLOBAL.wtf(tag, message)
}

/// Logs a boxed message through the process-wide gate.
pub fn shout(tag: &str, message: &str) -> bool {
    GLOBAL.shout(tag, message, DEFAULT_BOUNDARY)
}

/// Logs a pretty-printed JSON document through the process-wide gate.
pub fn json(tag: &str, message: &str) -> bool {
    GLOBAL.json(tag, message)
}

/// Logs an error chain through the process-wide gate.
pub fn exception(tag: &str, error: &(dyn Error + 'static)) -> bool {
    GLOBAL.exception(tag, error)
}
