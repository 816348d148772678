//! Movie node in the co-occurrence network.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::{PropertyMap, Separation, Value};

/// Opaque node identifier.
///
/// Input documents carry ids as strings or as numbers; numeric ids are
/// canonicalized to their decimal string so the rest of the engine deals
/// in a single id type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = NodeId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer node id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<NodeId, E> {
                Ok(NodeId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A movie in the co-occurrence network.
///
/// `separation` and `path_to_target` are derived annotations owned by the
/// analytics core; everything in `properties` (rank, year, genre, images,
/// cluster, ...) rides through untouched for the display collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    /// Cast list, split from the document's comma-delimited `cast_name`.
    #[serde(rename = "cast_name", with = "cast_field", default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub separation: Separation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_to_target: Vec<NodeId>,
    #[serde(flatten)]
    pub properties: PropertyMap,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cast: Vec::new(),
            separation: Separation::Unreachable,
            path_to_target: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_cast(mut self, cast: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Whether the given person appears in this movie's cast list.
    pub fn stars(&self, person: &str) -> bool {
        self.cast.iter().any(|member| member == person)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Clears the derived annotations back to their unlabeled state.
    pub fn reset_annotations(&mut self) {
        self.separation = Separation::Unreachable;
        self.path_to_target.clear();
    }
}

/// Serde bridge for the delimited cast field: a single `"A, B, C"` string
/// on the wire, a trimmed `Vec<String>` in memory.
mod cast_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(cast: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&cast.join(", "))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(split_cast(&raw))
    }

    fn split_cast(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .map(str::to_string)
            .collect()
    }
}
