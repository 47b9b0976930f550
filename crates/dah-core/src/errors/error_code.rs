//! Stable error codes for every failure the engine can surface.

/// Trait mapping an error to a stable, machine-readable code.
/// Every error enum implements this so callers can match on codes
/// without depending on message text.
pub trait DahErrorCode {
    /// Returns the code string (e.g., "UNKNOWN_FACTOR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_FACTOR: &str = "UNKNOWN_FACTOR";
pub const DUPLICATE_FACTOR: &str = "DUPLICATE_FACTOR";
pub const INVALID_FACTOR_WEIGHT: &str = "INVALID_FACTOR_WEIGHT";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const DANGLING_REFERENCE: &str = "DANGLING_REFERENCE";
pub const CYCLIC_ENTRY_GRAPH: &str = "CYCLIC_ENTRY_GRAPH";
pub const DUPLICATE_ENTRY: &str = "DUPLICATE_ENTRY";
pub const EMPTY_COMBINE_INPUT: &str = "EMPTY_COMBINE_INPUT";
pub const INVALID_CONTRIBUTION: &str = "INVALID_CONTRIBUTION";
pub const INVALID_COMBINE_WEIGHT: &str = "INVALID_COMBINE_WEIGHT";
pub const EXTENSION_DEPENDENCY_ERROR: &str = "EXTENSION_DEPENDENCY_ERROR";
pub const EXTENSION_VALIDATION_ERROR: &str = "EXTENSION_VALIDATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
