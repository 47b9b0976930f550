use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Id, Meta};
use crate::math::{Matrix, Vector};

/// Which side of a relation an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationSide {
    Contributor,
    Reference,
}

impl RelationSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contributor => "contributor",
            Self::Reference => "reference",
        }
    }
}

/// A cross-reference between entries that are not parent and child,
/// e.g. "this entry was influenced by that unrelated entry".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub contributors: BTreeMap<Id, Matrix>,
    #[serde(default)]
    pub references: BTreeMap<Id, Matrix>,
    pub score: Vector,
    #[serde(rename = "DAH_meta", default)]
    pub meta: Meta,
}

impl Relation {
    pub fn new(score: Vector) -> Self {
        Self {
            contributors: BTreeMap::new(),
            references: BTreeMap::new(),
            score,
            meta: Meta::Null,
        }
    }

    pub fn with_contributor(mut self, id: impl Into<Id>, matrix: Matrix) -> Self {
        self.contributors.insert(id.into(), matrix);
        self
    }

    pub fn with_reference(mut self, id: impl Into<Id>, matrix: Matrix) -> Self {
        self.references.insert(id.into(), matrix);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Every `(side, id, matrix)` edge, contributors first.
    pub fn edges(&self) -> impl Iterator<Item = (RelationSide, &Id, &Matrix)> {
        self.contributors
            .iter()
            .map(|(id, m)| (RelationSide::Contributor, id, m))
            .chain(
                self.references
                    .iter()
                    .map(|(id, m)| (RelationSide::Reference, id, m)),
            )
    }
}
