//! Span definitions per operation: aggregation, per-entry scoring, extension resolution.

/// Create an aggregation run span.
#[macro_export]
macro_rules! aggregation_span {
    ($entry_count:expr) => {
        tracing::info_span!("dah.aggregate", entry_count = $entry_count)
    };
}

/// Create a per-entry scoring span.
#[macro_export]
macro_rules! entry_span {
    ($entry_id:expr) => {
        tracing::debug_span!("dah.entry", entry_id = %$entry_id)
    };
}

/// Create an extension resolution span.
#[macro_export]
macro_rules! resolve_span {
    ($extension_count:expr) => {
        tracing::info_span!("dah.resolve", extension_count = $extension_count)
    };
}

/// Create a pipeline run span.
#[macro_export]
macro_rules! pipeline_span {
    ($extension_count:expr) => {
        tracing::info_span!("dah.pipeline", extension_count = $extension_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AGGREGATE: &str = "dah.aggregate";
    pub const ENTRY: &str = "dah.entry";
    pub const RESOLVE: &str = "dah.resolve";
    pub const PIPELINE: &str = "dah.pipeline";
}
