//! # Analysis Passes
//!
//! Pure batch computation over a `GraphStore` snapshot: adjacency
//! indexing, connected components, shortest-path distances, summary
//! statistics, and separation labeling.
//!
//! Every public entry point rebuilds its `AdjacencyIndex` from the store
//! it is handed. Derived results are valid only for the snapshot they
//! were computed from; the store's revision counter is the staleness
//! signal for anything a caller keeps around.

pub mod components;
pub mod index;
pub mod labeler;
pub mod paths;
pub mod stats;

pub use components::{extract_subgraph, find_components, ComponentSet};
pub use index::AdjacencyIndex;
pub use labeler::{apply_labels, label_separation, SeparationLabels};
pub use paths::{all_pairs_distances, single_source_distances, ApspCache, DistanceMatrix};
pub use stats::{average_degree, average_path_length, density, diameter, GraphStatistics};
