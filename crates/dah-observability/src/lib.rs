//! # dah-observability
//!
//! Structured logging for aggregation runs: subscriber setup, span macros,
//! and event helpers with stable field names.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
