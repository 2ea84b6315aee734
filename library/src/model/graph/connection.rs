//! Socket and link model for material graphs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::PropertyValue;

/// Data carried by a socket.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PinDataType {
    /// RGBA colour
    Color,
    /// Single float value
    Scalar,
    /// 3D vector (coordinates, normals)
    Vector,
    /// Shader closure
    Shader,
    /// Accepts any type (reroute)
    Any,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinDirection {
    Input,
    Output,
}

impl PinDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PinDirection::Input => "input",
            PinDirection::Output => "output",
        }
    }
}

/// Definition of a socket on a node type.
#[derive(Clone, Debug)]
pub struct PinDefinition {
    /// Internal name used for connections (e.g. "base_color")
    pub name: String,
    /// Display name (e.g. "Base Color")
    pub display_name: String,
    pub direction: PinDirection,
    pub data_type: PinDataType,
    /// Value used while the input is unconnected.
    pub default_value: Option<PropertyValue>,
}

impl PinDefinition {
    pub fn input(name: &str, display_name: &str, data_type: PinDataType) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            direction: PinDirection::Input,
            data_type,
            default_value: None,
        }
    }

    pub fn output(name: &str, display_name: &str, data_type: PinDataType) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            direction: PinDirection::Output,
            data_type,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: PropertyValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Identifies a specific socket on a specific node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinId {
    pub node_id: Uuid,
    pub pin_name: String,
}

impl PinId {
    pub fn new(node_id: Uuid, pin_name: &str) -> Self {
        Self {
            node_id,
            pin_name: pin_name.to_string(),
        }
    }
}

/// A link from an output socket to an input socket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Connection {
    pub id: Uuid,
    pub from: PinId,
    pub to: PinId,
}

impl Connection {
    pub fn new(from: PinId, to: PinId) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
        }
    }
}
