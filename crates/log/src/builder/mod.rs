//! Logger builder implementation
//!
//! - `reload`: runtime filter reload logic

mod reload;

pub use reload::ReloadHandle;

use tracing_subscriber::{
    Layer, Registry,
    fmt::time::SystemTime,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Registry with the filter layer applied; the fmt layer stacks on this.
type Filtered = Layered<reload::FilterLayer, Registry>;

/// Boxed fmt layer, whatever the format and timer.
type FmtLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

/// Build the fmt layer for one format with the given timer.
macro_rules! create_fmt_layer {
    ($format:ident, $config:expr, $timer:expr) => {
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi($config.colors)
            .with_timer($timer)
            .boxed()
    };
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Returned by [`LoggerBuilder::build`]
///
/// Holds the reload handle when the configuration asked for one.
#[derive(Debug)]
pub struct LoggerGuard {
    reload_handle: Option<ReloadHandle>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global logger
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the filter string cannot be parsed
    /// - a global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = reload::parse_filter(&self.config.level)?;
        let (filter_layer, reload_handle) =
            reload::create_filter_layer(filter, &self.config.level, self.config.reloadable);

        Registry::default()
            .with(filter_layer)
            .with(self.fmt_layer())
            .try_init()
            .map_err(|_| LogError::AlreadyInitialized)?;

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            reloadable = self.config.reloadable,
            "logger installed"
        );

        Ok(LoggerGuard { reload_handle })
    }

    fn fmt_layer(&self) -> FmtLayer {
        let config = &self.config;
        match (config.format, config.time) {
            (Format::Pretty, true) => create_fmt_layer!(pretty, config, SystemTime),
            (Format::Pretty, false) => create_fmt_layer!(pretty, config, ()),
            (Format::Compact, true) => create_fmt_layer!(compact, config, SystemTime),
            (Format::Compact, false) => create_fmt_layer!(compact, config, ()),
            (Format::Json, true) => create_fmt_layer!(json, config, SystemTime),
            (Format::Json, false) => create_fmt_layer!(json, config, ()),
        }
    }
}

impl LoggerGuard {
    /// Handle for swapping the filter at runtime, if the logger is reloadable
    #[must_use]
    pub fn reload_handle(&self) -> Option<&ReloadHandle> {
        self.reload_handle.as_ref()
    }
}
