use serde::{Deserialize, Serialize};

use crate::context::CombinePolicy;

/// Combine subsystem configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    /// Closed form used to merge magnitudes on one factor.
    pub policy: CombinePolicy,
}
