//! Separation labeling relative to a distinguished person.

use std::collections::VecDeque;

use tracing::info;

use crate::analysis::index::AdjacencyIndex;
use crate::model::{NodeId, Separation};
use crate::store::GraphStore;
use crate::Result;

/// Per-node separation labels, in store node order.
///
/// Carries the store fingerprint it was computed against so a write-back
/// after a structural mutation is refused instead of landing on the
/// wrong nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparationLabels {
    person: String,
    fingerprint: (u64, i32),
    distances: Vec<Separation>,
    paths: Vec<Vec<NodeId>>,
}

impl SeparationLabels {
    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, position: usize) -> Separation {
        self.distances[position]
    }

    /// Path from a seed movie to the node at `position`, both endpoints
    /// included. Empty when the node is unreachable.
    pub fn path(&self, position: usize) -> &[NodeId] {
        &self.paths[position]
    }
}

/// Multi-source BFS from every movie whose cast contains `person`.
///
/// Seeds enter the queue in node order at distance 0; neighbors are
/// visited in adjacency order. First discovery wins, which makes both
/// the distances and the recorded paths deterministic for a given store.
pub fn label_separation(store: &GraphStore, person: &str) -> Result<SeparationLabels> {
    let index = AdjacencyIndex::build(store)?;
    let n = index.len();
    let mut distances = vec![Separation::Unreachable; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    for (position, node) in store.nodes().iter().enumerate() {
        if node.stars(person) {
            distances[position] = Separation::Hops(0);
            queue.push_back(position);
        }
    }
    let seeds = queue.len();

    while let Some(current) = queue.pop_front() {
        let Separation::Hops(d) = distances[current] else {
            continue;
        };
        for &neighbor in index.neighbors(current) {
            if !distances[neighbor].is_reachable() {
                distances[neighbor] = Separation::Hops(d + 1);
                parents[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    // Parent pointers instead of a cloned path per discovery; each path
    // is materialized once, running seed → ... → node.
    let paths: Vec<Vec<NodeId>> = (0..n)
        .map(|position| {
            if !distances[position].is_reachable() {
                return Vec::new();
            }
            let mut path = Vec::new();
            let mut current = position;
            loop {
                path.push(index.id(current).clone());
                match parents[current] {
                    Some(parent) => current = parent,
                    None => break,
                }
            }
            path.reverse();
            path
        })
        .collect();

    let labeled = distances.iter().filter(|d| d.is_reachable()).count();
    info!(person, seeds, labeled, total = n, "separation labeling complete");

    Ok(SeparationLabels {
        person: person.to_string(),
        fingerprint: (store.revision(), store.structural_hash()),
        distances,
        paths,
    })
}

/// Writes the labels back onto the store's nodes, position by position.
///
/// Returns `false` (writing nothing) when the store has been structurally
/// mutated since the labels were computed.
pub fn apply_labels(store: &mut GraphStore, labels: &SeparationLabels) -> bool {
    if (store.revision(), store.structural_hash()) != labels.fingerprint
        || store.node_count() != labels.len()
    {
        return false;
    }
    let annotations = labels.distances.iter().zip(&labels.paths);
    for (node, (&distance, path)) in store.nodes_mut().iter_mut().zip(annotations) {
        node.separation = distance;
        node.path_to_target = path.clone();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    /// Path a-b-c plus isolated d; the person appears only in b's cast.
    fn fixture() -> GraphStore {
        GraphStore::new(
            vec![
                Node::new("a", "A").with_cast(["Someone Else"]),
                Node::new("b", "B").with_cast(["Robert De Niro", "Someone Else"]),
                Node::new("c", "C").with_cast(["Third Person"]),
                Node::new("d", "D").with_cast(["Robert De Niro Jr"]),
            ],
            vec![Edge::new("a", "b"), Edge::new("b", "c")],
        )
    }

    #[test]
    fn test_distances_from_single_seed() {
        let labels = label_separation(&fixture(), "Robert De Niro").unwrap();
        assert_eq!(labels.distance(0), Separation::Hops(1));
        assert_eq!(labels.distance(1), Separation::Hops(0));
        assert_eq!(labels.distance(2), Separation::Hops(1));
        assert_eq!(labels.distance(3), Separation::Unreachable);
    }

    #[test]
    fn test_paths_run_seed_to_node() {
        let labels = label_separation(&fixture(), "Robert De Niro").unwrap();
        assert_eq!(labels.path(1), &[NodeId::from("b")]);
        assert_eq!(labels.path(0), &[NodeId::from("b"), NodeId::from("a")]);
        assert_eq!(labels.path(2), &[NodeId::from("b"), NodeId::from("c")]);
        assert!(labels.path(3).is_empty());
    }

    #[test]
    fn test_cast_match_is_exact() {
        // "Robert De Niro Jr" must not seed a search for "Robert De Niro".
        let labels = label_separation(&fixture(), "Robert De Niro").unwrap();
        assert_eq!(labels.distance(3), Separation::Unreachable);
    }

    #[test]
    fn test_apply_writes_annotations() {
        let mut store = fixture();
        let labels = label_separation(&store, "Robert De Niro").unwrap();
        assert!(apply_labels(&mut store, &labels));

        let a = store.node(&"a".into()).unwrap();
        assert_eq!(a.separation, Separation::Hops(1));
        assert_eq!(a.path_to_target, vec![NodeId::from("b"), NodeId::from("a")]);
    }

    #[test]
    fn test_apply_refuses_stale_labels() {
        let mut store = fixture();
        let labels = label_separation(&store, "Robert De Niro").unwrap();
        store.add_node(Node::new("e", "E"));
        assert!(!apply_labels(&mut store, &labels));
        assert_eq!(
            store.node(&"a".into()).unwrap().separation,
            Separation::Unreachable
        );
    }

    #[test]
    fn test_no_seeds_leaves_everything_unreachable() {
        let labels = label_separation(&fixture(), "Nobody").unwrap();
        assert!((0..labels.len()).all(|i| !labels.distance(i).is_reachable()));
    }
}
