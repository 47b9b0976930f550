//! Top-level configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, CombineConfig, EngineConfig, ObservabilityConfig};
use crate::context::Context;
use crate::errors::{ConfigError, DahResult};
use crate::factor::{FactorDef, FactorRegistry};

/// Top-level configuration aggregating all sub-configs.
///
/// ```toml
/// [[factors]]
/// name = "emotion"
/// factor_weight = 1.0
/// subscore_weight = 0.5
///
/// [combine]
/// policy = "strongest_plus_weighted"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DahConfig {
    /// Factor catalog, in index order.
    pub factors: Vec<FactorDef>,
    pub combine: CombineConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl DahConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}",
                    defaults::LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Build the run context from the configured factors followed by `extra`.
    ///
    /// Factor weights and duplicate names are checked by the registry.
    pub fn build_context<I>(&self, extra: I) -> DahResult<Context>
    where
        I: IntoIterator<Item = FactorDef>,
    {
        let defs = self.factors.iter().cloned().chain(extra);
        let registry = FactorRegistry::new(defs)?;
        Ok(Context::with_policy(registry, self.combine.policy))
    }
}
