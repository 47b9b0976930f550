use super::error_code::{self, DahErrorCode};
use crate::constants::PATH_SEPARATOR;

/// Entry graph errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("dangling reference to '{id}' from {referrer}")]
    DanglingReference { id: String, referrer: String },

    #[error("cycle detected in entry graph: {}", .path.join(PATH_SEPARATOR))]
    CyclicEntryGraph { path: Vec<String> },

    #[error("entry id '{id}' appears more than once in the snapshot")]
    DuplicateEntry { id: String },
}

impl DahErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DanglingReference { .. } => error_code::DANGLING_REFERENCE,
            Self::CyclicEntryGraph { .. } => error_code::CYCLIC_ENTRY_GRAPH,
            Self::DuplicateEntry { .. } => error_code::DUPLICATE_ENTRY,
        }
    }
}
