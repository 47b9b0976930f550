// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_REJECT_DUPLICATE_IDS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

/// Accepted values for `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
