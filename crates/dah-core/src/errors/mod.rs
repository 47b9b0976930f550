//! Error handling for DAH.
//! One error enum per subsystem, `thiserror` only, aggregated by [`DahError`].

pub mod combine_error;
pub mod config_error;
pub mod error_code;
pub mod extension_error;
pub mod factor_error;
pub mod graph_error;
pub mod vector_error;

pub use combine_error::CombineError;
pub use config_error::ConfigError;
pub use error_code::DahErrorCode;
pub use extension_error::ExtensionDependencyError;
pub use factor_error::FactorError;
pub use graph_error::GraphError;
pub use vector_error::VectorError;

/// Top-level error for an aggregation run.
/// Every subsystem error converts into it via `From`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DahError {
    #[error("factor error: {0}")]
    Factor(#[from] FactorError),

    #[error("vector error: {0}")]
    Vector(#[from] VectorError),

    #[error("combine error: {0}")]
    Combine(#[from] CombineError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("extension dependency error: {0}")]
    ExtensionDependency(#[from] ExtensionDependencyError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Raised by an extension that rejects its own domain input.
    #[error("extension '{extension}' rejected its input: {reason}")]
    ExtensionValidation { extension: String, reason: String },
}

/// Convenience alias used across the workspace.
pub type DahResult<T> = Result<T, DahError>;

impl DahErrorCode for DahError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Factor(e) => e.error_code(),
            Self::Vector(e) => e.error_code(),
            Self::Combine(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::ExtensionDependency(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::ExtensionValidation { .. } => error_code::EXTENSION_VALIDATION_ERROR,
        }
    }
}
