//! Hardcoded shader node type definitions.

use super::node_types::{NodeCategory, NodeKind, NodeTypeDefinition};
use super::registry::NodeTypeRegistry;
use crate::model::graph::connection::{PinDataType, PinDefinition};
use crate::model::graph::property::PropertyValue;

/// Socket names shared by the definitions and the graph builder.
pub mod socket {
    pub const UV: &str = "uv";
    pub const GENERATED: &str = "generated";
    pub const OBJECT: &str = "object";
    pub const VECTOR: &str = "vector";
    pub const INPUT: &str = "input";
    pub const OUTPUT: &str = "output";
    pub const COLOR: &str = "color";
    pub const ALPHA: &str = "alpha";
    pub const STRENGTH: &str = "strength";
    pub const DISTANCE: &str = "distance";
    pub const HEIGHT: &str = "height";
    pub const NORMAL: &str = "normal";
    pub const FAC: &str = "fac";
    pub const COLOR1: &str = "color1";
    pub const COLOR2: &str = "color2";
    pub const BASE_COLOR: &str = "base_color";
    pub const METALLIC: &str = "metallic";
    pub const SPECULAR: &str = "specular";
    pub const ROUGHNESS: &str = "roughness";
    pub const BSDF: &str = "bsdf";
    pub const SURFACE: &str = "surface";
    pub const VOLUME: &str = "volume";
    pub const DISPLACEMENT: &str = "displacement";
}

/// Register all built-in node type definitions.
pub fn register_all_node_types(registry: &mut NodeTypeRegistry) {
    for def in all_node_definitions() {
        registry.register(def);
    }
}

fn inp(name: &str, display: &str, dt: PinDataType) -> PinDefinition {
    PinDefinition::input(name, display, dt)
}

fn out(name: &str, display: &str, dt: PinDataType) -> PinDefinition {
    PinDefinition::output(name, display, dt)
}

fn node(kind: NodeKind, name: &str, cat: NodeCategory) -> NodeTypeDefinition {
    NodeTypeDefinition::new(kind.type_id(), name, cat)
}

fn all_node_definitions() -> Vec<NodeTypeDefinition> {
    use NodeCategory as NC;
    use PinDataType::*;
    use socket::*;

    vec![
        // ==================== Input ====================
        node(NodeKind::TextureCoordinate, "Texture Coordinate", NC::Input)
            .with_description("Coordinate sources for texture lookups")
            .with_outputs(vec![
                out(GENERATED, "Generated", Vector),
                out(NORMAL, "Normal", Vector),
                out(UV, "UV", Vector),
                out(OBJECT, "Object", Vector),
            ]),
        // ==================== Vector ====================
        node(NodeKind::Mapping, "Mapping", NC::Vector)
            .with_description("Translate, rotate and scale texture coordinates")
            .with_inputs(vec![inp(VECTOR, "Vector", Vector)])
            .with_outputs(vec![out(VECTOR, "Vector", Vector)]),
        // ==================== Layout ====================
        node(NodeKind::Reroute, "Reroute", NC::Layout)
            .with_description("Routing point; retargets everything downstream at once")
            .with_inputs(vec![inp(INPUT, "Input", Any)])
            .with_outputs(vec![out(OUTPUT, "Output", Any)]),
        // ==================== Texture ====================
        node(NodeKind::ImageTexture, "Image Texture", NC::Texture)
            .with_description("Sample an image file")
            .with_inputs(vec![inp(VECTOR, "Vector", Vector)])
            .with_outputs(vec![out(COLOR, "Color", Color), out(ALPHA, "Alpha", Scalar)]),
        // ==================== Converter ====================
        node(NodeKind::NormalMap, "Normal Map", NC::Converter)
            .with_description("Convert a tangent-space normal image into a normal")
            .with_inputs(vec![
                inp(STRENGTH, "Strength", Scalar).with_default(PropertyValue::from(1.0)),
                inp(COLOR, "Color", Color),
            ])
            .with_outputs(vec![out(NORMAL, "Normal", Vector)]),
        node(NodeKind::Bump, "Bump", NC::Converter)
            .with_description("Derive a normal from a height image")
            .with_inputs(vec![
                inp(STRENGTH, "Strength", Scalar).with_default(PropertyValue::from(1.0)),
                inp(DISTANCE, "Distance", Scalar).with_default(PropertyValue::from(1.0)),
                inp(HEIGHT, "Height", Scalar),
                inp(NORMAL, "Normal", Vector),
            ])
            .with_outputs(vec![out(NORMAL, "Normal", Vector)]),
        // ==================== Color ====================
        node(NodeKind::MixMultiply, "Multiply", NC::Color)
            .with_description("Multiply two colours")
            .with_inputs(vec![
                inp(FAC, "Fac", Scalar).with_default(PropertyValue::from(1.0)),
                inp(COLOR1, "Color1", Color),
                inp(COLOR2, "Color2", Color),
            ])
            .with_outputs(vec![out(COLOR, "Color", Color)]),
        // ==================== Shader ====================
        node(NodeKind::PrincipledBsdf, "Principled BSDF", NC::Shader)
            .with_description("Physically based surface shader")
            .with_inputs(vec![
                inp(BASE_COLOR, "Base Color", Color),
                inp(METALLIC, "Metallic", Scalar).with_default(PropertyValue::from(0.0)),
                inp(SPECULAR, "Specular", Scalar).with_default(PropertyValue::from(0.5)),
                inp(ROUGHNESS, "Roughness", Scalar).with_default(PropertyValue::from(0.5)),
                inp(ALPHA, "Alpha", Scalar).with_default(PropertyValue::from(1.0)),
                inp(NORMAL, "Normal", Vector),
            ])
            .with_outputs(vec![out(BSDF, "BSDF", Shader)]),
        // ==================== Output ====================
        node(NodeKind::MaterialOutput, "Material Output", NC::Output)
            .with_description("Material terminal")
            .with_inputs(vec![
                inp(SURFACE, "Surface", Shader),
                inp(VOLUME, "Volume", Shader),
                inp(DISPLACEMENT, "Displacement", Vector),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::connection::PinDirection;

    #[test]
    fn test_every_node_kind_has_a_definition() {
        let defs = all_node_definitions();
        assert_eq!(defs.len(), NodeKind::ALL.len());
        for kind in NodeKind::ALL {
            assert!(
                defs.iter().any(|d| d.type_id == kind.type_id()),
                "Missing definition for {}",
                kind.type_id()
            );
        }
    }

    #[test]
    fn test_no_duplicate_type_ids() {
        let defs = all_node_definitions();
        let mut seen = std::collections::HashSet::new();
        for def in &defs {
            assert!(
                seen.insert(&def.type_id),
                "Duplicate type_id: {}",
                def.type_id
            );
        }
    }

    #[test]
    fn test_shader_inputs() {
        let defs = all_node_definitions();
        let bsdf = defs
            .iter()
            .find(|d| d.type_id == NodeKind::PrincipledBsdf.type_id())
            .unwrap();
        for name in [
            socket::BASE_COLOR,
            socket::SPECULAR,
            socket::ROUGHNESS,
            socket::ALPHA,
            socket::NORMAL,
        ] {
            assert!(bsdf.pin(name, PinDirection::Input).is_some(), "{}", name);
        }
        assert!(bsdf.pin(socket::BSDF, PinDirection::Output).is_some());
    }
}
