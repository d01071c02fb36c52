//! Log levels and the allow-set

use std::fmt;

use serde::{Deserialize, Serialize};

/// A level a tagged log call can be emitted at.
///
/// `All` is a shorthand accepted by the allow-set operations; it stands for
/// every concrete level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Every concrete level.
    All,
    /// Finest detail; emitted as `TRACE`.
    Verbose,
    /// Emitted as `DEBUG`.
    Debug,
    /// Emitted as `INFO`.
    Info,
    /// Emitted as `WARN`.
    Warn,
    /// Emitted as `ERROR`.
    Error,
    /// "What a terrible failure": emitted as `ERROR` with `wtf = true`.
    Wtf,
}

impl LogLevel {
    /// Every concrete level, finest first.
    pub const CONCRETE: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Wtf,
    ];

    /// The `tracing` level events of this level are emitted at.
    ///
    /// `All` maps to `TRACE`.
    #[must_use]
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::All | LogLevel::Verbose => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Wtf => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::All => "all",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Wtf => "wtf",
        })
    }
}

/// A set of concrete log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelSet(u8);

impl LevelSet {
    /// No level allowed.
    pub const EMPTY: Self = Self(0);
    /// Every concrete level allowed.
    pub const ALL: Self = Self(0b0011_1111);

    #[inline]
    const fn bits_of(level: LogLevel) -> u8 {
        match level {
            LogLevel::All => Self::ALL.0,
            LogLevel::Verbose => 1,
            LogLevel::Debug => 1 << 1,
            LogLevel::Info => 1 << 2,
            LogLevel::Warn => 1 << 3,
            LogLevel::Error => 1 << 4,
            LogLevel::Wtf => 1 << 5,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the set with `level` added (`All` adds every level).
    #[must_use]
    pub const fn with(self, level: LogLevel) -> Self {
        Self(self.0 | Self::bits_of(level))
    }

    /// Returns the set with `level` removed (`All` removes every level).
    #[must_use]
    pub const fn without(self, level: LogLevel) -> Self {
        Self(self.0 & !Self::bits_of(level))
    }

    /// Returns true if `level` is allowed (`All` asks for every level).
    #[must_use]
    pub const fn contains(self, level: LogLevel) -> bool {
        let bits = Self::bits_of(level);
        self.0 & bits == bits
    }

    /// Returns true if no level is allowed.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The allowed concrete levels, finest first.
    #[must_use]
    pub fn levels(self) -> Vec<LogLevel> {
        LogLevel::CONCRETE
            .into_iter()
            .filter(|level| self.contains(*level))
            .collect()
    }
}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}
