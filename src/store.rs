//! Canonical graph state.
//!
//! `GraphStore` owns the node list and edge list that every analysis pass
//! reads. It is a plain value: callers construct one per graph, pass it by
//! reference into the analysis entry points, and drop it when done. There
//! is no shared singleton and no interior locking.
//!
//! Two change signals are maintained:
//!
//! - a **revision counter**, bumped by every structural mutation, cheap to
//!   compare and the primary cache-invalidation signal;
//! - a **structural hash** over node ids and edge endpoints, stable across
//!   processes for collaborators that diff documents.
//!
//! Annotation writes (`annotate`, `reset_annotations`) do not advance the
//! revision: derived labels are not part of the graph's structure.

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{Edge, Node, NodeId, Separation};

/// Canonical nodes + edges with structural change tracking.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    revision: u64,
}

impl GraphStore {
    // ========================================================================
    // Construction & accessors
    // ========================================================================

    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            revision: 0,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Mutable node access for annotation write-back. Structural identity
    /// (ids, edges) must not be altered through this.
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Monotonic structural version. Equal revisions mean no structural
    /// mutation happened in between.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Structural mutation
    // ========================================================================

    pub fn add_node(&mut self, node: Node) {
        debug!(id = %node.id, "add node");
        self.nodes.push(node);
        self.revision += 1;
    }

    pub fn add_edge(&mut self, edge: Edge) {
        debug!(source = %edge.source, target = %edge.target, "add edge");
        self.edges.push(edge);
        self.revision += 1;
    }

    /// Removes a node and every edge incident to it. Returns `false` when
    /// the id is unknown (and leaves the revision untouched).
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| &n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| !e.touches(id));
        debug!(id = %id, "remove node");
        self.revision += 1;
        true
    }

    // ========================================================================
    // Annotations (non-structural)
    // ========================================================================

    /// Writes the derived labels onto a node. Returns `false` when the id
    /// is unknown. Does not advance the revision.
    pub fn annotate(&mut self, id: &NodeId, separation: Separation, path: Vec<NodeId>) -> bool {
        match self.nodes.iter_mut().find(|n| &n.id == id) {
            Some(node) => {
                node.separation = separation;
                node.path_to_target = path;
                true
            }
            None => false,
        }
    }

    /// Clears every node back to the unlabeled state. Does not advance the
    /// revision.
    pub fn reset_annotations(&mut self) {
        for node in &mut self.nodes {
            node.reset_annotations();
        }
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    /// Order-dependent fold of node ids and edge endpoint ids into an
    /// `i32`, using the `h = (h << 5) - h + c` wrapping recurrence. Two
    /// stores with the same ids in the same order hash identically, across
    /// processes.
    pub fn structural_hash(&self) -> i32 {
        let mut h: i32 = 0;
        for node in &self.nodes {
            h = mix(h, node.id.as_str());
        }
        for edge in &self.edges {
            h = mix(h, edge.source.as_str());
            h = mix(h, edge.target.as_str());
        }
        h
    }

    /// Rebuilds the id → incident-edge-count map. Every node appears, even
    /// at degree zero; endpoints of edges both count.
    pub fn recompute_degrees(&self) -> HashMap<NodeId, usize> {
        let mut degrees: HashMap<NodeId, usize> =
            self.nodes.iter().map(|n| (n.id.clone(), 0)).collect();
        for edge in &self.edges {
            if let Some(d) = degrees.get_mut(&edge.source) {
                *d += 1;
            }
            if let Some(d) = degrees.get_mut(&edge.target) {
                *d += 1;
            }
        }
        degrees
    }
}

fn mix(h: i32, s: &str) -> i32 {
    s.chars().fold(h, |acc, c| {
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(c as i32)
    })
}
