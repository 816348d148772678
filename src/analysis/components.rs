//! Connected-component discovery and extraction.

use std::collections::VecDeque;

use tracing::info;

use crate::model::{Edge, Node};
use crate::store::GraphStore;
use crate::analysis::index::AdjacencyIndex;

/// A partition of the index's dense positions: every position belongs to
/// exactly one component.
///
/// Members within a component are listed in discovery order, so the first
/// member is always the component's smallest position (the scan that
/// seeds each traversal walks positions in ascending order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    components: Vec<Vec<usize>>,
}

impl ComponentSet {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// The largest component. Ties are broken deterministically: largest
    /// size first, then the smallest minimum member position.
    pub fn largest(&self) -> Option<&[usize]> {
        self.components
            .iter()
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b[0].cmp(&a[0])))
            .map(Vec::as_slice)
    }
}

/// Partitions the graph into connected components with a queue-based
/// traversal seeded from each not-yet-visited position in ascending order.
pub fn find_components(index: &AdjacencyIndex) -> ComponentSet {
    let n = index.len();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut members = Vec::new();
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            members.push(current);
            for &neighbor in index.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(members);
    }

    info!(
        components = components.len(),
        nodes = n,
        "component partition complete"
    );
    ComponentSet { components }
}

/// Copies a component out of the store as an independent graph: cloned
/// nodes, plus every edge whose endpoints both fall inside the component.
/// Mutating the extraction never touches the source store.
pub fn extract_subgraph(
    store: &GraphStore,
    index: &AdjacencyIndex,
    members: &[usize],
) -> GraphStore {
    let mut in_component = vec![false; index.len()];
    for &m in members {
        in_component[m] = true;
    }

    let nodes: Vec<Node> = members
        .iter()
        .map(|&m| store.nodes()[m].clone())
        .collect();
    let edges: Vec<Edge> = store
        .edges()
        .iter()
        .filter(|e| {
            let src = index.position(&e.source);
            let dst = index.position(&e.target);
            matches!((src, dst), (Some(s), Some(d)) if in_component[s] && in_component[d])
        })
        .cloned()
        .collect();

    GraphStore::new(nodes, edges)
}
