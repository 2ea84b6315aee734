//! Node type definitions for material graphs.

use serde::{Deserialize, Serialize};

use crate::model::graph::connection::{PinDefinition, PinDirection};

/// Category of a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// Coordinate sources
    Input,
    /// Vector transforms (mapping)
    Vector,
    /// Image sampling
    Texture,
    /// Normal map, bump
    Converter,
    /// Colour mixing
    Color,
    /// Surface shaders
    Shader,
    /// Material output terminal
    Output,
    /// Reroute points
    Layout,
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeCategory::Input => "Input",
            NodeCategory::Vector => "Vector",
            NodeCategory::Texture => "Texture",
            NodeCategory::Converter => "Converter",
            NodeCategory::Color => "Color",
            NodeCategory::Shader => "Shader",
            NodeCategory::Output => "Output",
            NodeCategory::Layout => "Layout",
        };
        write!(f, "{}", s)
    }
}

/// The node kinds the graph builder asks a host to create.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    TextureCoordinate,
    Mapping,
    Reroute,
    ImageTexture,
    NormalMap,
    Bump,
    MixMultiply,
    PrincipledBsdf,
    MaterialOutput,
}

impl NodeKind {
    pub const ALL: [NodeKind; 9] = [
        NodeKind::TextureCoordinate,
        NodeKind::Mapping,
        NodeKind::Reroute,
        NodeKind::ImageTexture,
        NodeKind::NormalMap,
        NodeKind::Bump,
        NodeKind::MixMultiply,
        NodeKind::PrincipledBsdf,
        NodeKind::MaterialOutput,
    ];

    pub fn type_id(&self) -> &'static str {
        match self {
            NodeKind::TextureCoordinate => "shader.texture_coordinate",
            NodeKind::Mapping => "shader.mapping",
            NodeKind::Reroute => "layout.reroute",
            NodeKind::ImageTexture => "shader.image_texture",
            NodeKind::NormalMap => "shader.normal_map",
            NodeKind::Bump => "shader.bump",
            NodeKind::MixMultiply => "shader.mix_multiply",
            NodeKind::PrincipledBsdf => "shader.principled_bsdf",
            NodeKind::MaterialOutput => "shader.material_output",
        }
    }
}

/// Definition of a node type, registered in the `NodeTypeRegistry`.
///
/// Describes the sockets of a node type. Actual node instances are
/// `GraphNode` structs whose `type_id` references one of these.
#[derive(Debug, Clone)]
pub struct NodeTypeDefinition {
    pub type_id: String,
    pub display_name: String,
    pub category: NodeCategory,
    pub description: String,
    pub inputs: Vec<PinDefinition>,
    pub outputs: Vec<PinDefinition>,
}

impl NodeTypeDefinition {
    pub fn new(type_id: &str, display_name: &str, category: NodeCategory) -> Self {
        Self {
            type_id: type_id.to_string(),
            display_name: display_name.to_string(),
            category,
            description: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PinDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PinDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn pin(&self, name: &str, direction: PinDirection) -> Option<&PinDefinition> {
        let pins = match direction {
            PinDirection::Input => &self.inputs,
            PinDirection::Output => &self.outputs,
        };
        pins.iter().find(|p| p.name == name)
    }
}
