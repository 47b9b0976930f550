//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of an aggregation run.
pub fn aggregation_started(entries: usize, impacts: usize, relations: usize, factors: usize) {
    tracing::info!(
        event = "aggregation_started",
        entries = entries,
        impacts = impacts,
        relations = relations,
        factors = factors,
        "aggregation started"
    );
}

/// Log a completed aggregation run.
pub fn aggregation_completed(scored_entries: usize, contributions: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "aggregation_completed",
        scored_entries = scored_entries,
        contributions = contributions,
        elapsed_ms = elapsed_ms,
        "aggregation completed"
    );
}

/// Log an aborted aggregation run.
pub fn aggregation_failed(code: &str, message: &str) {
    tracing::warn!(
        event = "aggregation_failed",
        code = %code,
        detail = %message,
        "aggregation failed"
    );
}

/// Log the resolved extension initialization order.
pub fn extensions_resolved(order: &[String]) {
    tracing::info!(
        event = "extensions_resolved",
        order = ?order,
        "extensions resolved"
    );
}

/// Log what one extension contributed.
pub fn extension_contributed(extension: &str, impacts: usize, relations: usize) {
    tracing::debug!(
        event = "extension_contributed",
        extension = %extension,
        impacts = impacts,
        relations = relations,
        "extension contributed"
    );
}
