//! Entry graph: petgraph storage, reference validation, and DAG enforcement.

pub mod dag_enforcement;
pub mod entry_graph;
pub mod references;

pub use entry_graph::EntryGraph;
