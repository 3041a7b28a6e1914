use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::GraphError;

// ─────────────────────────────────────────────
// NodeId
// ─────────────────────────────────────────────

/// Opaque node identifier.
///
/// In practice this is the node label from the source file (or the raw id
/// when no label is given). Identity is textual: two declarations with the
/// same text are the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─────────────────────────────────────────────
// RawNetwork
// ─────────────────────────────────────────────

/// A network as the loaders hand it over: declared nodes in document order
/// plus links that may be directed, duplicated, or reference nodes that were
/// never declared.
///
/// [`RawNetwork::into_undirected`] is the only way to turn this into a
/// [`Graph`]: direction is collapsed, duplicate links between the same pair
/// coalesce, and link endpoints are registered as nodes if missing.
#[derive(Debug, Default, Clone)]
pub struct RawNetwork {
    nodes: Vec<NodeId>,
    links: Vec<(NodeId, NodeId)>,
}

impl RawNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    pub fn add_link(&mut self, from: NodeId, to: NodeId) {
        self.links.push((from, to));
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Collapse into an immutable undirected [`Graph`].
    ///
    /// Node order is first-seen order (declared nodes first, then endpoints
    /// that only appear in links), which fixes component discovery order and
    /// makes output reproducible for a given input file.
    pub fn into_undirected(self) -> Graph {
        let mut graph = Graph::default();
        for id in self.nodes {
            graph.intern(id);
        }
        let mut seen = HashSet::new();
        for (from, to) in self.links {
            let a = graph.intern(from);
            let b = graph.intern(to);
            let key = (a.min(b), a.max(b));
            if !seen.insert(key) {
                continue;
            }
            graph.edges.push(key);
            if a != b {
                graph.adj[a].push(b);
                graph.adj[b].push(a);
            }
        }
        graph
    }
}

// ─────────────────────────────────────────────
// Graph
// ─────────────────────────────────────────────

/// Immutable undirected graph.
///
/// Nodes occupy dense slots `0..node_count()` in insertion order; adjacency
/// is slot-indexed so traversals run over `usize` instead of hashing ids.
/// Self-loops are kept in the edge set (they count as edges) but never
/// appear in adjacency, so they cannot affect shortest-path distances.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adj: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    fn intern(&mut self, id: NodeId) -> usize {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(id.clone());
        self.index.insert(id, slot);
        self.adj.push(Vec::new());
        slot
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// Each undirected edge exactly once, endpoints in slot order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.edges.iter().map(|&(a, b)| (&self.nodes[a], &self.nodes[b]))
    }

    /// Neighbors of `id`; empty for an unknown or isolated node.
    pub fn neighbors<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.index
            .get(id)
            .into_iter()
            .flat_map(move |&slot| self.adj[slot].iter().map(move |&n| &self.nodes[n]))
    }

    /// Dense-slot view of `id`'s neighbors, for traversal loops.
    pub fn neighbor_slots(&self, slot: usize) -> &[usize] {
        &self.adj[slot]
    }

    pub fn node_at(&self, slot: usize) -> &NodeId {
        &self.nodes[slot]
    }

    /// The subgraph induced by `subset`: those nodes plus every edge of
    /// `self` whose endpoints both lie in the subset.
    ///
    /// Fails with [`GraphError::InvalidNodeSet`] if any id is absent from
    /// this graph. Node order in the subgraph follows `subset`.
    pub fn induced_subgraph(&self, subset: &[NodeId]) -> Result<Graph, GraphError> {
        let mut sub = Graph::default();
        let mut slot_map: HashMap<usize, usize> = HashMap::with_capacity(subset.len());
        for id in subset {
            match self.index.get(id) {
                Some(&slot) => {
                    let new_slot = sub.intern(id.clone());
                    slot_map.insert(slot, new_slot);
                }
                None => return Err(GraphError::InvalidNodeSet(id.clone())),
            }
        }
        for &(a, b) in &self.edges {
            if let (Some(&na), Some(&nb)) = (slot_map.get(&a), slot_map.get(&b)) {
                sub.edges.push((na.min(nb), na.max(nb)));
                if na != nb {
                    sub.adj[na].push(nb);
                    sub.adj[nb].push(na);
                }
            }
        }
        Ok(sub)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
