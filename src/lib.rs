//! # costar — Co-occurrence Network Analytics
//!
//! Structural analysis of a movie co-occurrence network: movies are
//! nodes, and two movies are connected when they share a cast member.
//! The crate computes connected components, shortest-path distances,
//! summary statistics, and per-movie separation numbers relative to a
//! distinguished person.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: a [`GraphStore`] is a plain owned value — no
//!    global singleton, no hidden caches
//! 2. **Clean DTOs**: [`Node`], [`Edge`], [`Separation`] cross all
//!    boundaries
//! 3. **Snapshot semantics**: every analysis pass rebuilds its adjacency
//!    view from the store it is handed; the revision counter is the only
//!    staleness signal callers need
//! 4. **Tagged distances**: unreachable is a variant, not a `-1` buried
//!    in the numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use costar::{Edge, GraphStatistics, GraphStore, Network, Node};
//!
//! # fn example() -> costar::Result<()> {
//! let mut network = Network::new(GraphStore::new(
//!     vec![
//!         Node::new("1", "Heat").with_cast(["Robert De Niro", "Al Pacino"]),
//!         Node::new("2", "Ronin").with_cast(["Robert De Niro", "Jean Reno"]),
//!     ],
//!     vec![Edge::new("1", "2")],
//! ));
//!
//! network.annotate("Robert De Niro")?;
//! let stats = GraphStatistics::compute(network.store())?;
//! println!("diameter: {:?}", stats.diameter);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod analysis;
pub mod document;
pub mod model;
pub mod store;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Edge, Node, NodeId, PropertyMap, Separation, Value};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::GraphStore;

// ============================================================================
// Re-exports: Analysis
// ============================================================================

pub use analysis::{
    all_pairs_distances, apply_labels, average_degree, average_path_length, density, diameter,
    extract_subgraph, find_components, label_separation, single_source_distances, AdjacencyIndex,
    ApspCache, ComponentSet, DistanceMatrix, GraphStatistics, SeparationLabels,
};

// ============================================================================
// Re-exports: Documents
// ============================================================================

pub use document::{read_clusters, read_image_links, GraphDocument, ImageLinks};

// ============================================================================
// Top-level Network handle
// ============================================================================

/// The primary entry point. A `Network` wraps a [`GraphStore`] together
/// with an all-pairs distance cache and runs the load → analyze →
/// annotate → save pipeline.
pub struct Network {
    store: GraphStore,
    apsp: ApspCache,
}

impl Network {
    pub fn new(store: GraphStore) -> Self {
        Self {
            store,
            apsp: ApspCache::new(),
        }
    }

    pub fn from_document(document: GraphDocument) -> Self {
        Self::new(document.into_store())
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    /// All-pairs shortest-path distances, reused across calls until the
    /// store is structurally mutated.
    pub fn distances(&mut self) -> Result<&DistanceMatrix> {
        self.apsp.distances(&self.store)
    }

    /// The bundled statistics summary.
    pub fn statistics(&self) -> Result<GraphStatistics> {
        GraphStatistics::compute(&self.store)
    }

    /// Computes separation labels relative to `person` and writes them
    /// onto the nodes.
    pub fn annotate(&mut self, person: &str) -> Result<()> {
        let labels = label_separation(&self.store, person)?;
        apply_labels(&mut self.store, &labels);
        Ok(())
    }

    /// Snapshot for saving, annotations included.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument::from_store(&self.store)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("node not found: {id}")]
    MissingNode { id: NodeId },

    #[error("cannot compute {0} over an empty set")]
    EmptyMetric(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
