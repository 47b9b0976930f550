use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Id, Meta};
use crate::math::{Matrix, Vector};

/// A direct scoring contribution, not mediated by a child entry.
///
/// `score` is routed onto every contributor through that contributor's matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default)]
    pub contributors: BTreeMap<Id, Matrix>,
    pub score: Vector,
    #[serde(rename = "DAH_meta", default)]
    pub meta: Meta,
}

impl Impact {
    pub fn new(score: Vector) -> Self {
        Self {
            contributors: BTreeMap::new(),
            score,
            meta: Meta::Null,
        }
    }

    pub fn with_contributor(mut self, id: impl Into<Id>, matrix: Matrix) -> Self {
        self.contributors.insert(id.into(), matrix);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}
