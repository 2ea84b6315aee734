//! In-memory material graph, the default `NodeGraphHost`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::connection::{Connection, PinDirection, PinId};
use super::graph_analysis::{self, validate_connection};
use super::graph_node::{GraphNode, NodeHandle};
use super::property::{PropertyMap, PropertyValue};
use crate::error::HostError;
use crate::host::NodeGraphHost;
use crate::nodes::{NodeKind, NodeTypeDefinition, NodeTypeRegistry};

static BUILTIN_REGISTRY: Lazy<Arc<NodeTypeRegistry>> =
    Lazy::new(|| Arc::new(NodeTypeRegistry::with_builtin_types()));

fn builtin_registry() -> Arc<NodeTypeRegistry> {
    BUILTIN_REGISTRY.clone()
}

/// Nodes and links of one material, in creation order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MaterialGraph {
    pub nodes: Vec<GraphNode>,
    pub connections: Vec<Connection>,
    #[serde(skip, default = "builtin_registry")]
    registry: Arc<NodeTypeRegistry>,
}

impl Default for MaterialGraph {
    fn default() -> Self {
        Self::with_registry(builtin_registry())
    }
}

impl MaterialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Arc<NodeTypeRegistry>) -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            registry,
        }
    }

    pub fn get_node(&self, id: Uuid) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_node_mut(&mut self, id: Uuid) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&GraphNode> {
        self.get_node(handle.0)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&GraphNode> {
        self.nodes
            .iter()
            .filter(|n| n.type_id == kind.type_id())
            .collect()
    }

    pub fn get_input_connection(&self, pin: &PinId) -> Option<&Connection> {
        graph_analysis::get_input_connection(self, pin)
    }

    /// Whether `from.from_socket` is linked to `to.to_socket`.
    pub fn is_connected(
        &self,
        from: NodeHandle,
        from_socket: &str,
        to: NodeHandle,
        to_socket: &str,
    ) -> bool {
        self.get_input_connection(&PinId::new(to.0, to_socket))
            .is_some_and(|c| c.from == PinId::new(from.0, from_socket))
    }

    pub fn outgoing(&self, node: NodeHandle) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |c| c.from.node_id == node.0)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn definition(&self, node_id: Uuid) -> Result<&NodeTypeDefinition, HostError> {
        let node = self.get_node(node_id).ok_or(HostError::UnknownNode(node_id))?;
        self.registry
            .get(&node.type_id)
            .ok_or_else(|| HostError::Other(format!("unregistered node type '{}'", node.type_id)))
    }

    fn require_pin(
        &self,
        node_id: Uuid,
        socket: &str,
        direction: PinDirection,
    ) -> Result<(), HostError> {
        let def = self.definition(node_id)?;
        if def.pin(socket, direction).is_none() {
            return Err(HostError::UnknownSocket {
                type_id: def.type_id.clone(),
                socket: socket.to_string(),
                direction: direction.as_str(),
            });
        }
        Ok(())
    }
}

impl NodeGraphHost for MaterialGraph {
    fn create_node(&mut self, kind: NodeKind) -> Result<NodeHandle, HostError> {
        if self.registry.get(kind.type_id()).is_none() {
            return Err(HostError::NodeCreation {
                type_id: kind.type_id().to_string(),
                reason: "node type not registered".to_string(),
            });
        }
        let node = GraphNode::new(kind.type_id(), PropertyMap::new());
        let handle = NodeHandle(node.id);
        self.nodes.push(node);
        Ok(handle)
    }

    fn connect(
        &mut self,
        from: NodeHandle,
        from_socket: &str,
        to: NodeHandle,
        to_socket: &str,
    ) -> Result<(), HostError> {
        self.require_pin(from.0, from_socket, PinDirection::Output)?;
        self.require_pin(to.0, to_socket, PinDirection::Input)?;

        let conn = Connection::new(PinId::new(from.0, from_socket), PinId::new(to.0, to_socket));
        validate_connection(self, &conn).map_err(HostError::InvalidConnection)?;
        self.connections.push(conn);
        Ok(())
    }

    fn set_property(
        &mut self,
        node: NodeHandle,
        key: &str,
        value: PropertyValue,
    ) -> Result<(), HostError> {
        let target = self
            .get_node_mut(node.0)
            .ok_or(HostError::UnknownNode(node.0))?;
        target.properties.set(key, value);
        Ok(())
    }

    fn remove_node(&mut self, node: NodeHandle) -> Result<(), HostError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == node.0)
            .ok_or(HostError::UnknownNode(node.0))?;
        self.nodes.remove(index);
        self.connections
            .retain(|c| c.from.node_id != node.0 && c.to.node_id != node.0);
        Ok(())
    }
}
