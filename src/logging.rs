use std::fs::OpenOptions;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing.
///
/// `RUST_LOG` overrides the configured level. Logs go to stderr, keeping
/// stdout for command output, or are appended to `config.file` when set.
/// Calling this twice is harmless: the second global subscriber is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true);

    let result = match &config.file {
        Some(path) => {
            let file = match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!(
                        "Warning: Failed to open log file '{}': {}",
                        path.display(),
                        err
                    );
                    return;
                }
            };
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_writer(file).with_ansi(false))
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing already initialized");
    }
}
