//! Every id referenced anywhere in a snapshot must resolve to an indexed entry.

use std::collections::BTreeMap;

use dah_core::errors::GraphError;
use dah_core::{Data, Entry};

/// Check children, impact contributors, and relation contributors/references.
///
/// Entries are checked in id order, then impacts and relations in sequence
/// order; the first dangling id is reported with its referrer.
pub fn validate_references(data: &Data, index: &BTreeMap<&str, &Entry>) -> Result<(), GraphError> {
    let check = |id: &str, referrer: &dyn Fn() -> String| {
        if index.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::DanglingReference {
                id: id.to_string(),
                referrer: referrer(),
            })
        }
    };

    for (&entry_id, entry) in index {
        for child in entry.children.keys() {
            check(child, &|| format!("entry '{entry_id}' child"))?;
        }
    }
    for (i, impact) in data.impacts.iter().enumerate() {
        for id in impact.contributors.keys() {
            check(id, &|| format!("impact #{i} contributor"))?;
        }
    }
    for (i, relation) in data.relations.iter().enumerate() {
        for (side, id, _) in relation.edges() {
            check(id, &|| format!("relation #{i} {}", side.as_str()))?;
        }
    }
    Ok(())
}
