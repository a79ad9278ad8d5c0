use common::config::Settings;
use tracing_subscriber::{EnvFilter, Registry, prelude::*, reload};

const BOOTSTRAP_LEVEL: &str = "info";

/// Handle on the installed level filter. `RUST_LOG` wins; otherwise the
/// configured level replaces the bootstrap one once settings are loaded.
pub struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogFilter {
    fn new(env_filter: Option<EnvFilter>) -> (reload::Layer<EnvFilter, Registry>, Self) {
        let from_env = env_filter.is_some();
        let (layer, handle) =
            reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_LEVEL)));
        (layer, Self { handle, from_env })
    }

    pub fn apply_settings(&self, settings: &Settings) -> Result<(), reload::Error> {
        if self.from_env {
            return Ok(());
        }
        self.handle.reload(EnvFilter::new(&settings.log_level))
    }

    pub fn current(&self) -> Option<String> {
        self.handle.with_current(|filter| filter.to_string()).ok()
    }
}

/// Installs the subscriber. Call before loading settings so their logs are kept.
pub fn init() -> LogFilter {
    let (layer, filter) = LogFilter::new(EnvFilter::try_from_default_env().ok());
    tracing_subscriber::registry()
        .with(layer)
        .with(tracing_subscriber::fmt::layer())
        .init();
    filter
}
