//! Summary statistics for the display collaborator.

use hashbrown::HashMap;
use serde::Serialize;
use tracing::info;

use crate::analysis::components::{extract_subgraph, find_components};
use crate::analysis::index::AdjacencyIndex;
use crate::analysis::paths::{all_pairs_distances, DistanceMatrix};
use crate::model::NodeId;
use crate::store::GraphStore;
use crate::{Error, Result};

/// Mean incident-edge count over the supplied degree mapping.
///
/// An empty mapping is an explicit error, never a silent zero.
pub fn average_degree(degrees: &HashMap<NodeId, usize>) -> Result<f64> {
    if degrees.is_empty() {
        return Err(Error::EmptyMetric("average degree"));
    }
    let total: usize = degrees.values().sum();
    Ok(total as f64 / degrees.len() as f64)
}

/// `2E / (V * (V - 1))`, the fraction of possible undirected edges that
/// exist. Graphs with at most one node have no possible edges and get the
/// conventional `0.0`.
pub fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    (2.0 * edge_count as f64) / (node_count as f64 * (node_count - 1) as f64)
}

/// The longest shortest path over *reachable* ordered pairs of distinct
/// positions. `None` when no node can reach another; unreachable pairs
/// never pollute the maximum.
pub fn diameter(matrix: &DistanceMatrix) -> Option<u32> {
    matrix
        .ordered_pairs()
        .filter_map(|(_, _, d)| d.hops())
        .max()
}

/// Mean shortest-path distance over ordered pairs of distinct nodes in
/// the largest component. Every such pair is reachable, so the mean is
/// always finite; a largest component with fewer than two nodes has no
/// pairs and is an explicit error.
pub fn average_path_length(store: &GraphStore) -> Result<f64> {
    let index = AdjacencyIndex::build(store)?;
    let set = find_components(&index);
    let largest = set
        .largest()
        .ok_or(Error::EmptyMetric("average path length"))?;
    if largest.len() < 2 {
        return Err(Error::EmptyMetric("average path length"));
    }

    let subgraph = extract_subgraph(store, &index, largest);
    let sub_index = AdjacencyIndex::build(&subgraph)?;
    let matrix = all_pairs_distances(&sub_index);

    let n = sub_index.len();
    let total: u64 = matrix
        .ordered_pairs()
        .filter_map(|(_, _, d)| d.hops().map(u64::from))
        .sum();
    Ok(total as f64 / (n * (n - 1)) as f64)
}

/// The bundled summary handed to the display collaborator in one shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub average_degree: f64,
    pub component_count: usize,
    pub density: f64,
    /// `None` when no reachable pair of distinct nodes exists; rendered
    /// as "undefined" downstream.
    pub diameter: Option<u32>,
    pub average_path_length: f64,
}

impl GraphStatistics {
    pub fn compute(store: &GraphStore) -> Result<Self> {
        let index = AdjacencyIndex::build(store)?;
        let set = find_components(&index);
        let matrix = all_pairs_distances(&index);

        let stats = Self {
            average_degree: average_degree(&store.recompute_degrees())?,
            component_count: set.len(),
            density: density(store.node_count(), store.edge_count()),
            diameter: diameter(&matrix),
            average_path_length: average_path_length(store)?,
        };
        info!(
            components = stats.component_count,
            diameter = ?stats.diameter,
            "statistics computed"
        );
        Ok(stats)
    }
}
