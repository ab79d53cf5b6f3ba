use std::sync::Once;

/// Logger setup for binaries built on the engine.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. "info" or
/// "ember_engine=debug,wgpu=warn". When unset, `RUST_LOG` from the
/// environment applies, and failing that the level defaults to info.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Idempotent; later calls are no-ops, so
/// libraries and tests may call it freely.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.write_style(config.write_style);

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());
        match filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
