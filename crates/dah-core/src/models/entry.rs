use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Id, Meta};
use crate::math::Matrix;

/// A consumed-media node.
///
/// Each child edge carries the matrix that turns the child's aggregated
/// score into this entry's contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Id,
    #[serde(default)]
    pub children: BTreeMap<Id, Matrix>,
    #[serde(rename = "DAH_meta", default)]
    pub meta: Meta,
}

impl Entry {
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            children: BTreeMap::new(),
            meta: Meta::Null,
        }
    }

    /// Add (or replace) a child edge.
    pub fn with_child(mut self, child: impl Into<Id>, matrix: Matrix) -> Self {
        self.children.insert(child.into(), matrix);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}
