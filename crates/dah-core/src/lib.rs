//! # dah-core
//!
//! Foundation crate for the DAH impact-score engine.
//! Defines the factor registry and context, vector/matrix primitives,
//! the entity model, errors, config, and the extension trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod factor;
pub mod math;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DahConfig;
pub use context::{new_zero_vector, CombinePolicy, Context};
pub use errors::{DahError, DahResult};
pub use factor::{Factor, FactorDef, FactorRegistry};
pub use math::{Matrix, Vector};
pub use models::{Data, Entry, Id, Impact, Meta, Relation};
pub use traits::{Contribution, Extension};
