use super::error_code::{self, DahErrorCode};

/// Factor registry errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactorError {
    #[error("unknown factor: {name}")]
    UnknownFactor { name: String },

    #[error("factor '{name}' is declared more than once")]
    DuplicateFactor { name: String },

    #[error("factor '{name}' has invalid {field} {value}")]
    InvalidWeight {
        name: String,
        field: &'static str,
        value: f64,
    },
}

impl DahErrorCode for FactorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFactor { .. } => error_code::UNKNOWN_FACTOR,
            Self::DuplicateFactor { .. } => error_code::DUPLICATE_FACTOR,
            Self::InvalidWeight { .. } => error_code::INVALID_FACTOR_WEIGHT,
        }
    }
}
