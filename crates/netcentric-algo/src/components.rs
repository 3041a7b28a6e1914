//! Connected components via breadth-first sweep.

use std::collections::VecDeque;

use netcentric_graph::{Graph, NodeId};

/// Partition `graph` into its maximal connected components.
///
/// Sweeps nodes in insertion order and runs a BFS from each unvisited one,
/// so component order (and node order within a component) is the discovery
/// order of the traversal — stable for a given input. Isolated nodes form
/// singleton components; an empty graph yields an empty vec.
pub fn connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut members = vec![graph.node_at(start).clone()];
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            for &w in graph.neighbor_slots(v) {
                if !visited[w] {
                    visited[w] = true;
                    members.push(graph.node_at(w).clone());
                    queue.push_back(w);
                }
            }
        }
        components.push(members);
    }
    components
}
