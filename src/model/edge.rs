//! Shared-cast edge between two movies.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// An undirected co-occurrence edge: the two movies share a cast member.
///
/// Edges carry no type and no properties; the connection itself is the
/// whole payload. `source`/`target` naming follows the document format,
/// not a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }

    /// The "other" endpoint from the given node.
    pub fn other_endpoint(&self, from: &NodeId) -> Option<&NodeId> {
        if from == &self.source {
            Some(&self.target)
        } else if from == &self.target {
            Some(&self.source)
        } else {
            None
        }
    }
}
