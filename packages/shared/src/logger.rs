//! Logger setup.
//!
//! Diagnostics are written to stderr so that stdout carries only program
//! output. `RUST_LOG` takes precedence over the default level when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose own logs never go above `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &[&str] = &["tungstenite", "tokio_tungstenite", "rustls"];

/// Build the env filter used by [`setup_logger`].
///
/// # Arguments
///
/// * `default_level` - Level applied when `RUST_LOG` is not set
pub fn build_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let quiet_level = default_level.min(LevelFilter::WARN);
        let mut directives = default_level.to_string();
        for target in QUIET_TARGETS {
            directives.push_str(&format!(",{target}={quiet_level}"));
        }
        EnvFilter::new(directives)
    })
}

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless: later calls are ignored.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary
/// * `default_level` - Level applied when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: LevelFilter) {
    let initialized = tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok();

    if initialized {
        tracing::debug!("Logger initialized for '{}' (level: {})", bin_name, default_level);
    }
}
