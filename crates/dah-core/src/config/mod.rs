//! Configuration for an aggregation run.
//! TOML-based; every section falls back to compiled defaults.

pub mod combine_config;
pub mod dah_config;
pub mod defaults;
pub mod engine_config;
pub mod observability_config;

pub use combine_config::CombineConfig;
pub use dah_config::DahConfig;
pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
