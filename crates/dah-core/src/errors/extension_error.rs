use super::error_code::{self, DahErrorCode};
use crate::constants::PATH_SEPARATOR;

/// Unmet or cyclic extension dependency declarations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtensionDependencyError {
    #[error("extension '{extension}' depends on unregistered extension '{dependency}'")]
    MissingDependency {
        extension: String,
        dependency: String,
    },

    #[error("circular extension dependencies among: {}", .unresolved.join(PATH_SEPARATOR))]
    DependencyCycle { unresolved: Vec<String> },

    #[error("extension '{name}' is registered more than once")]
    DuplicateExtension { name: String },
}

impl DahErrorCode for ExtensionDependencyError {
    fn error_code(&self) -> &'static str {
        error_code::EXTENSION_DEPENDENCY_ERROR
    }
}
