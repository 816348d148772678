//! Dense adjacency view over a store snapshot.

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::model::NodeId;
use crate::store::GraphStore;
use crate::{Error, Result};

/// Neighbor positions per node. Co-occurrence degrees are small, so most
/// lists stay inline.
type NeighborList = SmallVec<[usize; 8]>;

/// Id → dense position map plus per-node neighbor lists.
///
/// Position `i` corresponds to `store.nodes()[i]`; the builder walks the
/// node list in order. The index is valid only for the snapshot it was
/// built from. There is no way to construct one except [`build`], and the
/// traversal entry points build their own per call, so a stale index
/// cannot be observed through the public API.
///
/// [`build`]: AdjacencyIndex::build
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    ids: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    neighbors: Vec<NeighborList>,
}

impl AdjacencyIndex {
    /// Builds the index from the store's current node and edge lists.
    ///
    /// Fails with [`Error::MissingNode`] on the first edge endpoint that
    /// does not appear in the node list. Parallel edges produce repeated
    /// neighbor entries; traversals deduplicate via their visited sets.
    pub fn build(store: &GraphStore) -> Result<Self> {
        let ids: Vec<NodeId> = store.nodes().iter().map(|n| n.id.clone()).collect();
        let positions: HashMap<NodeId, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut neighbors = vec![NeighborList::new(); ids.len()];
        for edge in store.edges() {
            let source = *positions.get(&edge.source).ok_or_else(|| Error::MissingNode {
                id: edge.source.clone(),
            })?;
            let target = *positions.get(&edge.target).ok_or_else(|| Error::MissingNode {
                id: edge.target.clone(),
            })?;
            neighbors[source].push(target);
            neighbors[target].push(source);
        }

        debug!(
            nodes = ids.len(),
            edges = store.edge_count(),
            "adjacency index built"
        );
        Ok(Self {
            ids,
            positions,
            neighbors,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id at a dense position.
    pub fn id(&self, position: usize) -> &NodeId {
        &self.ids[position]
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// The dense position of an id, if present.
    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Neighbor positions of the node at `position`, in edge-list order.
    pub fn neighbors(&self, position: usize) -> &[usize] {
        &self.neighbors[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    #[test]
    fn test_positions_follow_node_order() {
        let store = GraphStore::new(
            vec![Node::new("x", "X"), Node::new("y", "Y")],
            vec![Edge::new("x", "y")],
        );
        let index = AdjacencyIndex::build(&store).unwrap();
        assert_eq!(index.position(&"x".into()), Some(0));
        assert_eq!(index.position(&"y".into()), Some(1));
        assert_eq!(index.neighbors(0), &[1]);
        assert_eq!(index.neighbors(1), &[0]);
    }

    #[test]
    fn test_dangling_edge_is_rejected() {
        let store = GraphStore::new(
            vec![Node::new("x", "X")],
            vec![Edge::new("x", "ghost")],
        );
        match AdjacencyIndex::build(&store) {
            Err(Error::MissingNode { id }) => assert_eq!(id, "ghost".into()),
            other => panic!("expected MissingNode, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_store() {
        let index = AdjacencyIndex::build(&GraphStore::default()).unwrap();
        assert!(index.is_empty());
    }
}
