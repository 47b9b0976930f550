//! Cycle detection and children-first evaluation order.

use petgraph::algo::toposort;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::NodeIndexable;

use dah_core::errors::GraphError;

use super::entry_graph::EntryGraph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

struct Frame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    next: usize,
}

/// Depth-first search tracking the active path.
///
/// Returns the first cycle found as an id path that repeats its first id at
/// the end (`A -> B -> A`). Roots and children are visited in id order, so
/// the reported cycle is stable across runs.
pub fn find_cycle(graph: &EntryGraph<'_>) -> Option<Vec<String>> {
    let mut marks = vec![Mark::Unvisited; graph.graph.node_bound()];
    let mut path: Vec<NodeIndex> = Vec::new();

    for root in graph.nodes() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::OnPath;
        path.push(root);
        let mut stack = vec![Frame {
            node: root,
            children: graph.children(root),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = frame.children.get(frame.next) {
                frame.next += 1;
                match marks[child.index()] {
                    Mark::OnPath => {
                        let start = path.iter().position(|&n| n == child).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            path[start..].iter().map(|&n| graph.id(n).to_string()).collect();
                        cycle.push(graph.id(child).to_string());
                        return Some(cycle);
                    }
                    Mark::Unvisited => {
                        marks[child.index()] = Mark::OnPath;
                        path.push(child);
                        stack.push(Frame {
                            node: child,
                            children: graph.children(child),
                            next: 0,
                        });
                    }
                    Mark::Done => {}
                }
            } else {
                marks[frame.node.index()] = Mark::Done;
                stack.pop();
                path.pop();
            }
        }
    }
    None
}

/// Nodes ordered children-first, so every child is scored before its parents.
///
/// Fails with `CyclicEntryGraph` carrying the offending id path.
pub fn evaluation_order(graph: &EntryGraph<'_>) -> Result<Vec<NodeIndex>, GraphError> {
    match toposort(&graph.graph, None) {
        Ok(mut order) => {
            order.reverse();
            Ok(order)
        }
        Err(cycle) => {
            let path = find_cycle(graph).unwrap_or_else(|| {
                let id = graph.id(cycle.node_id()).to_string();
                vec![id.clone(), id]
            });
            Err(GraphError::CyclicEntryGraph { path })
        }
    }
}
