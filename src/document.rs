//! Graph document I/O — load, auxiliary merges, save.
//!
//! The document format is plain JSON: a `nodes` array of movie records
//! and an edge array of `{source, target}` pairs. Historic saves name
//! the edge array `links`; this writer emits `edges`. Both are accepted
//! on load.

use std::io::{Read, Write};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{Edge, Node, NodeId, Value};
use crate::store::GraphStore;
use crate::Result;

/// Image lookup record, keyed by node id in the auxiliary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub small_img_link: Option<String>,
    #[serde(default)]
    pub large_img_link: Option<String>,
}

/// The on-disk graph document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    #[serde(alias = "links", default)]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Reads a document and clears any derived annotations it carries:
    /// labels computed against a previous structure are meaningless for
    /// the freshly loaded graph.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut doc: GraphDocument = serde_json::from_reader(reader)?;
        for node in &mut doc.nodes {
            node.reset_annotations();
        }
        info!(
            nodes = doc.nodes.len(),
            edges = doc.edges.len(),
            "graph document loaded"
        );
        Ok(doc)
    }

    /// Writes the document, annotations included, as pretty JSON.
    pub fn to_writer(&self, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn into_store(self) -> GraphStore {
        GraphStore::new(self.nodes, self.edges)
    }

    /// Snapshot of a store, for saving after analysis.
    pub fn from_store(store: &GraphStore) -> Self {
        Self {
            nodes: store.nodes().to_vec(),
            edges: store.edges().to_vec(),
        }
    }

    /// Merges image links onto the nodes. Nodes absent from the lookup
    /// get explicit `null` links so the display layer never sees a
    /// missing key.
    pub fn merge_image_links(&mut self, links: &HashMap<NodeId, ImageLinks>) {
        for node in &mut self.nodes {
            let (small, large) = match links.get(&node.id) {
                Some(entry) => (
                    opt_value(entry.small_img_link.as_deref()),
                    opt_value(entry.large_img_link.as_deref()),
                ),
                None => (Value::Null, Value::Null),
            };
            node.properties.insert("small_img_link".to_string(), small);
            node.properties.insert("large_img_link".to_string(), large);
        }
    }

    /// Merges cluster assignments onto the nodes; unassigned nodes land
    /// in cluster `0`.
    pub fn merge_clusters(&mut self, clusters: &HashMap<NodeId, i64>) {
        for node in &mut self.nodes {
            let cluster = clusters.get(&node.id).copied().unwrap_or(0);
            node.properties.insert("cluster".to_string(), Value::Int(cluster));
        }
    }
}

/// Parses an auxiliary image-link document (id → links).
pub fn read_image_links<R: Read>(reader: R) -> Result<HashMap<NodeId, ImageLinks>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses an auxiliary cluster-assignment document (id → cluster).
pub fn read_clusters<R: Read>(reader: R) -> Result<HashMap<NodeId, i64>> {
    Ok(serde_json::from_reader(reader)?)
}

fn opt_value(s: Option<&str>) -> Value {
    match s {
        Some(s) => Value::String(s.to_string()),
        None => Value::Null,
    }
}
