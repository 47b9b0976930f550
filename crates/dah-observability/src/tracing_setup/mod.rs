//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use dah_core::config::defaults::DEFAULT_LOG_LEVEL;
use dah_core::config::ObservabilityConfig;
use dah_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install a JSON subscriber filtered by `DAH_LOG`, defaulting to `info`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Install a JSON subscriber with an explicit filter directive (for tests or
/// embedding); `DAH_LOG` is ignored. An unparsable directive falls back to
/// the default level.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    install(filter, true)
}

/// Initialize tracing from configuration; `DAH_LOG` still takes precedence.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));
    install(filter, config.json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
