use std::sync::Once;

use log::LevelFilter;

/// Modules that report recoverable ICN input problems at `warn` level.
const DIAGNOSTIC_MODULES: &[&str] = &["icn_lang", "icn_engine"];

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "icn_engine=debug"). When unset, `RUST_LOG` is consulted, then `warn`.
///
/// `diagnostics` controls whether malformed-input warnings from the parser
/// and interpreter are shown. Turning it off raises those modules to `error`
/// after the filter is applied.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub diagnostics: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
            diagnostics: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn quiet_diagnostics(mut self) -> Self {
        self.diagnostics = false;
        self
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match self.filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Warn);
            }
        }

        if !self.diagnostics {
            for module in DIAGNOSTIC_MODULES {
                builder.filter_module(module, LevelFilter::Error);
            }
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Another logger may already be installed (e.g. by a host application).
        if config.builder().try_init().is_err() {
            return;
        }
        log::debug!("logging initialized ({:?})", config);
    });
}
