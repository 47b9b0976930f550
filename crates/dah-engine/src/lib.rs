//! # dah-engine
//!
//! Turns a flat `Data` snapshot into one score vector per entry.
//! Validates references, enforces an acyclic entry graph (`petgraph`),
//! propagates child scores through edge matrices children-first, and merges
//! every contribution per factor with Combine. Also orders extensions by
//! their declared dependencies and wires them into a scoring pipeline.

pub mod engine;
pub mod graph;
pub mod pipeline;
pub mod resolver;
pub mod result;

pub use engine::{aggregate, AggregationEngine};
pub use pipeline::{PipelineOutput, ScoringPipeline};
pub use resolver::ExtensionResolver;
pub use result::{AggregationResult, ContributionSource, Provenance};
