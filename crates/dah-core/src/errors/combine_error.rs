use super::error_code::{self, DahErrorCode};

/// Combine (diminishing-returns reduction) errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombineError {
    #[error("combine called with no contributions")]
    EmptyInput,

    #[error("contribution {index} is {value}; magnitudes must be finite and non-negative")]
    InvalidContribution { index: usize, value: f64 },

    #[error("weight {weight} for contribution {index} is outside (0, 1)")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("rank decay needs one shared weight: contribution {index} has {weight}, expected {expected}")]
    MixedWeights {
        index: usize,
        weight: f64,
        expected: f64,
    },
}

impl DahErrorCode for CombineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EMPTY_COMBINE_INPUT,
            Self::InvalidContribution { .. } => error_code::INVALID_CONTRIBUTION,
            Self::InvalidWeight { .. } | Self::MixedWeights { .. } => {
                error_code::INVALID_COMBINE_WEIGHT
            }
        }
    }
}
