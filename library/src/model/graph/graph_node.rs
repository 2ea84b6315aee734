//! Node instances inside a material graph.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::PropertyMap;

/// A node in a material graph.
///
/// `type_id` references a `NodeTypeDefinition` in the `NodeTypeRegistry`,
/// which decides the node's sockets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: Uuid,
    /// Examples: "shader.image_texture", "shader.principled_bsdf"
    pub type_id: String,
    pub properties: PropertyMap,
}

impl GraphNode {
    pub fn new(type_id: &str, properties: PropertyMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            type_id: type_id.to_string(),
            properties,
        }
    }
}

/// Opaque reference to a node created through a `NodeGraphHost`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeHandle(pub Uuid);

impl std::fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
