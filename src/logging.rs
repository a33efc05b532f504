// src/logging.rs
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;

/// Map a `LOG_LEVEL` value onto a tracing filter directive.
/// Accepts the usual aliases (`WARNING`, `CRITICAL`, `FATAL`); unknown -> info.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        "off" | "none" => "off",
        _ => "info",
    }
}

/// Install a compact fmt subscriber. `RUST_LOG` wins over `LOG_LEVEL`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&settings.log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init();
}
