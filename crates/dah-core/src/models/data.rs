use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Entry, Impact, Relation};
use crate::context::Context;
use crate::errors::VectorError;

/// The full snapshot handed to the aggregation engine.
///
/// Never partially updated: every computation takes a complete value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Data {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub impacts: Vec<Impact>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Data {
    pub fn new(entries: Vec<Entry>, impacts: Vec<Impact>, relations: Vec<Relation>) -> Self {
        Self {
            entries,
            impacts,
            relations,
        }
    }

    /// Id → entry lookup, last write wins on duplicates.
    pub fn index(&self) -> BTreeMap<&str, &Entry> {
        index_entries(&self.entries)
    }

    /// Ids that appear on more than one entry, in sorted order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut dupes = BTreeSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                dupes.insert(entry.id.clone());
            }
        }
        dupes.into_iter().collect()
    }

    /// Check that every vector and matrix in the snapshot is sized for `ctx`.
    pub fn check_dimensions(&self, ctx: &Context) -> Result<(), VectorError> {
        for entry in &self.entries {
            for matrix in entry.children.values() {
                matrix.check_dimension(ctx)?;
            }
        }
        for impact in &self.impacts {
            impact.score.check_dimension(ctx)?;
            for matrix in impact.contributors.values() {
                matrix.check_dimension(ctx)?;
            }
        }
        for relation in &self.relations {
            relation.score.check_dimension(ctx)?;
            for (_, _, matrix) in relation.edges() {
                matrix.check_dimension(ctx)?;
            }
        }
        Ok(())
    }
}

/// Build the Id → entry lookup used by the propagation engine.
///
/// Later entries overwrite earlier ones with the same Id; callers that treat
/// duplicates as errors must check [`Data::duplicate_ids`] first.
pub fn index_entries<'a, I>(entries: I) -> BTreeMap<&'a str, &'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut index = BTreeMap::new();
    for entry in entries {
        index.insert(entry.id.as_str(), entry);
    }
    index
}
