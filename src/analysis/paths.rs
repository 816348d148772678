//! BFS shortest-path distances, single-source and all-pairs.

use std::collections::VecDeque;

use tracing::debug;

use crate::analysis::index::AdjacencyIndex;
use crate::model::Separation;
use crate::store::GraphStore;
use crate::Result;

/// Minimum hop counts from `source` to every position, in index order.
/// Positions in other components come back [`Separation::Unreachable`].
///
/// Plain FIFO breadth-first search: first discovery is minimum distance,
/// so a position is enqueued at most once.
pub fn single_source_distances(index: &AdjacencyIndex, source: usize) -> Vec<Separation> {
    let mut distances = vec![Separation::Unreachable; index.len()];
    let mut queue = VecDeque::new();

    distances[source] = Separation::Hops(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let Separation::Hops(d) = distances[current] else {
            continue;
        };
        for &neighbor in index.neighbors(current) {
            if !distances[neighbor].is_reachable() {
                distances[neighbor] = Separation::Hops(d + 1);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// Square matrix of pairwise distances, row `i` = distances from position
/// `i`. Row and column order follow the index (and therefore the store's
/// node list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<Separation>>,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> Separation {
        self.rows[from][to]
    }

    pub fn row(&self, from: usize) -> &[Separation] {
        &self.rows[from]
    }

    /// All ordered pairs `(from, to, distance)` with `from != to`.
    pub fn ordered_pairs(&self) -> impl Iterator<Item = (usize, usize, Separation)> + '_ {
        self.rows.iter().enumerate().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(move |(to, _)| *to != from)
                .map(move |(to, &d)| (from, to, d))
        })
    }
}

/// Runs single-source BFS from every position.
pub fn all_pairs_distances(index: &AdjacencyIndex) -> DistanceMatrix {
    let rows = (0..index.len())
        .map(|source| single_source_distances(index, source))
        .collect();
    DistanceMatrix { rows }
}

/// All-pairs matrix with change-gated reuse.
///
/// The stored fingerprint (store revision + structural hash) is captured
/// *before* computation starts, so a mutation that races a long
/// computation can only cause a spurious recompute, never a stale hit.
/// Within the single-threaded contract the gate is exact: a hit requires
/// revision equality against the same store.
#[derive(Debug, Default)]
pub struct ApspCache {
    entry: Option<((u64, i32), DistanceMatrix)>,
}

impl ApspCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The matrix for the store's current structure, recomputing only
    /// when the fingerprint moved since the last call.
    pub fn distances(&mut self, store: &GraphStore) -> Result<&DistanceMatrix> {
        let fingerprint = (store.revision(), store.structural_hash());
        let hit = matches!(&self.entry, Some((stored, _)) if *stored == fingerprint);
        if hit {
            debug!(revision = fingerprint.0, "all-pairs cache hit");
        } else {
            debug!(revision = fingerprint.0, "all-pairs cache miss, recomputing");
            let index = AdjacencyIndex::build(store)?;
            self.entry = Some((fingerprint, all_pairs_distances(&index)));
        }
        let (_, matrix) = self.entry.as_ref().expect("entry populated above");
        Ok(matrix)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
