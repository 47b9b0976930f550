use serde::{Deserialize, Serialize};

use super::defaults;

/// Propagation engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fail on duplicate entry ids instead of letting the last one win.
    pub reject_duplicate_ids: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_ids: defaults::DEFAULT_REJECT_DUPLICATE_IDS,
        }
    }
}
