/// DAH engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serialized key of the provenance payload on entries, impacts, and relations.
pub const META_KEY: &str = "DAH_meta";

/// Separator used when rendering id paths (cycles, dependency chains).
pub const PATH_SEPARATOR: &str = " -> ";

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "DAH_LOG";
