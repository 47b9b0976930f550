//! Entity model: the entries, impacts, and relations being aggregated.

pub mod data;
pub mod entry;
pub mod impact;
pub mod relation;

pub use data::{index_entries, Data};
pub use entry::Entry;
pub use impact::Impact;
pub use relation::{Relation, RelationSide};

/// Opaque entry identifier, unique within a [`Data`] snapshot.
pub type Id = String;

/// Free-form provenance payload (`DAH_meta`), passed through unmodified.
pub type Meta = serde_json::Value;
