//! petgraph::StableGraph wrapper over borrowed entries; edges point parent → child.

use std::collections::{BTreeMap, HashMap};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use dah_core::{Entry, Matrix};

/// The underlying directed graph type.
pub type EntryStableGraph<'a> = StableGraph<&'a Entry, &'a Matrix, Directed>;

/// Entry graph with id-ordered traversal helpers.
pub struct EntryGraph<'a> {
    /// The petgraph stable graph.
    pub graph: EntryStableGraph<'a>,
}

impl<'a> EntryGraph<'a> {
    /// Build the graph from an entry index.
    ///
    /// Nodes are added in id order. Child ids missing from the index are
    /// skipped; callers validate references first.
    pub fn build(index: &BTreeMap<&'a str, &'a Entry>) -> Self {
        let mut graph = StableGraph::with_capacity(index.len(), 0);
        let mut node_index = HashMap::with_capacity(index.len());
        for (&id, &entry) in index {
            node_index.insert(id, graph.add_node(entry));
        }
        for (&id, &entry) in index {
            let parent = node_index[id];
            for (child_id, matrix) in &entry.children {
                if let Some(&child) = node_index.get(child_id.as_str()) {
                    graph.add_edge(parent, child, matrix);
                }
            }
        }
        Self { graph }
    }

    /// The entry stored at `node`.
    pub fn entry(&self, node: NodeIndex) -> Option<&'a Entry> {
        self.graph.node_weight(node).copied()
    }

    /// Id of the entry stored at `node` (empty if the node is unknown).
    pub fn id(&self, node: NodeIndex) -> &'a str {
        self.entry(node).map(|e| e.id.as_str()).unwrap_or_default()
    }

    /// Children of `node`, sorted by id.
    pub fn children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, petgraph::Direction::Outgoing)
            .collect();
        children.sort_by(|a, b| self.id(*a).cmp(self.id(*b)));
        children
    }

    /// All nodes, sorted by id.
    pub fn nodes(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.graph.node_indices().collect();
        nodes.sort_by(|a, b| self.id(*a).cmp(self.id(*b)));
        nodes
    }
}
