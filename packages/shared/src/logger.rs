//! Logging setup utilities for the Irori binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default filter enables the given crate, this shared crate and
/// `tower_http` request traces at `default_log_level`. The whole filter can be
/// overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `crate_name` - The name of the calling crate or binary (e.g., "irori-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use irori_shared::logger::setup_logger;
///
/// setup_logger("irori-server", "debug");
/// ```
pub fn setup_logger(crate_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(crate_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(crate_name: &str, default_log_level: &str) -> String {
    format!(
        "{}={level},{}={level},tower_http={level}",
        crate_name.replace('-', "_"),
        env!("CARGO_PKG_NAME").replace('-', "_"),
        level = default_log_level,
    )
}
