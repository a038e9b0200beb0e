use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "flatbar_ui=debug,flatbar_engine=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix each record with a millisecond timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

/// Lifetime token for the logging service.
///
/// Held by the host for the whole session; dropping it flushes buffered records.
#[derive(Debug)]
#[must_use = "dropping the handle immediately flushes and ends the logging session"]
pub struct LoggingHandle {
    _private: (),
}

impl Drop for LoggingHandle {
    fn drop(&mut self) {
        log::debug!("logging shut down");
        log::logger().flush();
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend once and returns the session handle.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// Later calls do not reinstall the backend but still return a handle.
pub fn init_logging(config: LoggingConfig) -> LoggingHandle {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        // A test harness may already own the global logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });

    LoggingHandle { _private: () }
}
