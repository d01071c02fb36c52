//! Reload logic for runtime filter changes

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing_subscriber::{EnvFilter, Layer, Registry, reload};

use crate::error::{LogError, LogResult};

/// Filter layer as installed on the registry.
pub(super) type FilterLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Handle for runtime filter changes
#[derive(Clone)]
pub struct ReloadHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    /// Current filter string, lock-free reads
    current_filter: Arc<ArcSwap<String>>,
}

impl ReloadHandle {
    /// Reload the log filter at runtime
    ///
    /// # Errors
    /// Returns error if filter parsing fails or the subscriber is gone
    pub fn reload(&self, filter: &str) -> LogResult<()> {
        let new_filter = parse_filter(filter)?;
        self.filter
            .reload(new_filter)
            .map_err(|e| LogError::Config(format!("failed to reload filter: {e}")))?;
        self.current_filter.store(Arc::new(filter.to_string()));
        Ok(())
    }

    /// Get the current filter string
    #[must_use]
    pub fn current_filter(&self) -> Arc<String> {
        self.current_filter.load_full()
    }
}

impl fmt::Debug for ReloadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReloadHandle")
            .field("current_filter", &self.current_filter.load())
            .finish_non_exhaustive()
    }
}

pub(super) fn parse_filter(filter: &str) -> LogResult<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| LogError::Filter(format!("{filter}: {e}")))
}

/// Create a filter layer, optionally wrapping it in a reloadable layer
pub(super) fn create_filter_layer(
    filter: EnvFilter,
    level: &str,
    reloadable: bool,
) -> (FilterLayer, Option<ReloadHandle>) {
    if reloadable {
        let (layer, handle) = reload::Layer::new(filter);
        let reload_handle = ReloadHandle {
            filter: handle,
            current_filter: Arc::new(ArcSwap::from_pointee(level.to_string())),
        };
        (Box::new(layer), Some(reload_handle))
    } else {
        (Box::new(filter), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_layer_has_no_handle() {
        let filter = parse_filter("info").unwrap();
        let (_layer, handle) = create_filter_layer(filter, "info", false);
        assert!(handle.is_none());
    }

    #[test]
    fn test_reload_updates_current_filter() {
        let filter = parse_filter("info").unwrap();
        let (_layer, handle) = create_filter_layer(filter, "info", true);
        let handle = handle.unwrap();
        assert_eq!(handle.current_filter().as_str(), "info");

        handle.reload("debug,lite_validator=trace").unwrap();
        assert_eq!(handle.current_filter().as_str(), "debug,lite_validator=trace");
    }

    #[test]
    fn test_reload_rejects_bad_filter() {
        let filter = parse_filter("info").unwrap();
        let (_layer, handle) = create_filter_layer(filter, "info", true);
        let handle = handle.unwrap();

        assert!(matches!(handle.reload("lite_log=notalevel"), Err(LogError::Filter(_))));
        assert_eq!(handle.current_filter().as_str(), "info");
    }

    #[test]
    fn test_parse_filter_error() {
        assert!(matches!(parse_filter("lite_log=notalevel"), Err(LogError::Filter(_))));
    }
}
