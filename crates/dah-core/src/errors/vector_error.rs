use super::error_code::{self, DahErrorCode};

/// Vector and matrix operand errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl VectorError {
    /// Fail unless `actual == expected`.
    pub fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, actual })
        }
    }
}

impl DahErrorCode for VectorError {
    fn error_code(&self) -> &'static str {
        error_code::DIMENSION_MISMATCH
    }
}
