//! Graph construction: turn a resolved assignment into shader nodes and links
//! through a [`NodeGraphHost`].

use std::collections::{BTreeMap, HashMap};

use log::{debug, info, warn};

use super::resolve::ResolvedAssignment;
use crate::error::{HostError, LibraryError};
use crate::host::NodeGraphHost;
use crate::model::channel::Channel;
use crate::model::component::ComponentFile;
use crate::model::config::{AmbientOcclusionMode, DisplacementUsage, ImportConfiguration};
use crate::model::graph::{NodeHandle, PropertyValue, Vec2};
use crate::model::material::{BuiltMaterial, DetachedTexture, DisplacementMethod};
use crate::nodes::{NodeKind, socket};

const COORDINATES_AT: Vec2 = Vec2::new(-600.0, 0.0);
const MAPPING_AT: Vec2 = Vec2::new(-400.0, 0.0);
const ROUTING_AT: Vec2 = Vec2::new(-200.0, -150.0);
const SHADER_AT: Vec2 = Vec2::new(500.0, 0.0);
const OUTPUT_AT: Vec2 = Vec2::new(850.0, 0.0);
const FIRST_IMAGE_AT: Vec2 = Vec2::new(-100.0, 200.0);
const IMAGE_STEP: f64 = -300.0;
const CONVERTER_OFFSET: f64 = 300.0;

/// Property keys written onto image nodes.
pub mod property {
    pub const LOCATION: &str = "location";
    pub const LABEL: &str = "label";
    pub const IMAGE_PATH: &str = "image_path";
    pub const IMAGE_NAME: &str = "image_name";
    pub const COLORSPACE: &str = "colorspace";
    pub const INTERPOLATION: &str = "interpolation";
    pub const PROJECTION: &str = "projection";
    pub const EXTENSION: &str = "extension";
    pub const PROJECTION_BLEND: &str = "projection_blend";
}

pub const COLORSPACE_SRGB: &str = "sRGB";
pub const COLORSPACE_NON_COLOR: &str = "Non-Color";

/// Name given to the image loaded for `file` in material `material_name`.
/// The builder appends `_2`, `_3`, ... when the same name comes up again.
pub fn image_name(material_name: &str, file: &ComponentFile) -> String {
    format!("{}_{}", material_name, file.alias())
}

/// Builds one material into a host graph.
///
/// Every node created is remembered; if any host call fails the builder
/// removes them again before reporting `GraphConstruction`.
pub struct GraphBuilder<'a, H: NodeGraphHost + ?Sized> {
    host: &'a mut H,
    config: &'a ImportConfiguration,
    created: Vec<NodeHandle>,
    next_image_at: Vec2,
    image_names: HashMap<String, usize>,
}

impl<'a, H: NodeGraphHost + ?Sized> GraphBuilder<'a, H> {
    pub fn new(host: &'a mut H, config: &'a ImportConfiguration) -> Self {
        Self {
            host,
            config,
            created: Vec::new(),
            next_image_at: FIRST_IMAGE_AT,
            image_names: HashMap::new(),
        }
    }

    pub fn build(
        mut self,
        material_name: &str,
        assignment: &ResolvedAssignment,
    ) -> Result<BuiltMaterial, LibraryError> {
        match self.build_nodes(material_name, assignment) {
            Ok(built) => {
                info!(
                    "Built material '{}' with {} node(s)",
                    material_name,
                    self.created.len()
                );
                Ok(built)
            }
            Err(err) => {
                warn!("Building '{}' failed: {}", material_name, err);
                self.rollback();
                Err(err.into())
            }
        }
    }

    fn build_nodes(
        &mut self,
        material_name: &str,
        assignment: &ResolvedAssignment,
    ) -> Result<BuiltMaterial, HostError> {
        let coordinates = self.add_node(NodeKind::TextureCoordinate, COORDINATES_AT)?;
        let mapping = self.add_node(NodeKind::Mapping, MAPPING_AT)?;
        self.host.connect(coordinates, socket::UV, mapping, socket::VECTOR)?;
        let routing = self.add_node(NodeKind::Reroute, ROUTING_AT)?;
        self.host.connect(mapping, socket::VECTOR, routing, socket::INPUT)?;

        let shader = self.add_node(NodeKind::PrincipledBsdf, SHADER_AT)?;
        let output = self.add_node(NodeKind::MaterialOutput, OUTPUT_AT)?;
        self.host.connect(shader, socket::BSDF, output, socket::SURFACE)?;

        let multiply_ao = self.config.ambient_occlusion_mode == AmbientOcclusionMode::Multiply
            && assignment.contains(Channel::AmbientOcclusion)
            && assignment.contains(Channel::Diffuse);

        let mut images = BTreeMap::new();
        let mut converters = BTreeMap::new();
        let mut detached_textures = Vec::new();
        let mut displacement_method = DisplacementMethod::default();

        for channel in Channel::WIRING_ORDER {
            let Some(file) = assignment.get(channel) else {
                continue;
            };
            let active = assignment.active_geometry == Some(channel);

            if channel == Channel::Displacement
                && active
                && self.config.displacement_usage == DisplacementUsage::Texture
            {
                detached_textures.push(DetachedTexture {
                    name: self.claim_image_name(material_name, file),
                    path: file.path.clone(),
                });
                continue;
            }

            let (image, at) = self.add_image(material_name, channel, file, routing)?;
            images.insert(channel, image);
            let converter_at = at.offset(CONVERTER_OFFSET, 0.0);

            match channel {
                Channel::Diffuse if multiply_ao => {
                    let mix = self.add_node(NodeKind::MixMultiply, converter_at)?;
                    self.host
                        .set_property(mix, socket::FAC, PropertyValue::from(1.0))?;
                    self.host.connect(image, socket::COLOR, mix, socket::COLOR1)?;
                    self.host
                        .connect(mix, socket::COLOR, shader, socket::BASE_COLOR)?;
                    converters.insert(Channel::AmbientOcclusion, mix);
                }
                Channel::Diffuse => {
                    self.host
                        .connect(image, socket::COLOR, shader, socket::BASE_COLOR)?;
                }
                Channel::AmbientOcclusion => match converters.get(&Channel::AmbientOcclusion) {
                    Some(&mix) => {
                        self.host.connect(image, socket::COLOR, mix, socket::COLOR2)?;
                    }
                    None => debug!("Ambient occlusion image left unconnected"),
                },
                Channel::Specular => {
                    self.host
                        .connect(image, socket::COLOR, shader, socket::SPECULAR)?;
                }
                Channel::Roughness => {
                    self.host
                        .connect(image, socket::COLOR, shader, socket::ROUGHNESS)?;
                }
                Channel::Alpha => {
                    self.host.connect(image, socket::COLOR, shader, socket::ALPHA)?;
                }
                Channel::Normal => {
                    let normal_map = self.add_node(NodeKind::NormalMap, converter_at)?;
                    self.host
                        .connect(image, socket::COLOR, normal_map, socket::COLOR)?;
                    if active {
                        self.host
                            .connect(normal_map, socket::NORMAL, shader, socket::NORMAL)?;
                    }
                    converters.insert(Channel::Normal, normal_map);
                }
                Channel::Bump => {
                    let bump = self.add_node(NodeKind::Bump, converter_at)?;
                    self.host.connect(image, socket::COLOR, bump, socket::HEIGHT)?;
                    if active {
                        self.host.connect(bump, socket::NORMAL, shader, socket::NORMAL)?;
                    }
                    converters.insert(Channel::Bump, bump);
                }
                Channel::Displacement => {
                    if active && self.config.displacement_usage == DisplacementUsage::Material {
                        self.host
                            .connect(image, socket::COLOR, output, socket::DISPLACEMENT)?;
                        displacement_method = DisplacementMethod::Both;
                    }
                }
                Channel::Unknown => {}
            }
        }

        let mut extras = Vec::with_capacity(assignment.unused.len());
        for unused in &assignment.unused {
            let (image, _) =
                self.add_image(material_name, unused.channel, &unused.file, routing)?;
            extras.push(image);
        }

        Ok(BuiltMaterial {
            coordinates,
            mapping,
            routing,
            shader,
            output,
            images,
            converters,
            extras,
            active_geometry: assignment.active_geometry,
            displacement_method,
            detached_textures,
        })
    }

    fn add_node(&mut self, kind: NodeKind, at: Vec2) -> Result<NodeHandle, HostError> {
        let handle = self.host.create_node(kind)?;
        self.created.push(handle);
        self.host
            .set_property(handle, property::LOCATION, PropertyValue::from(at))?;
        Ok(handle)
    }

    /// Creates an image node in the next free slot, applies the sampling
    /// settings and feeds it from the routing node.
    fn add_image(
        &mut self,
        material_name: &str,
        channel: Channel,
        file: &ComponentFile,
        routing: NodeHandle,
    ) -> Result<(NodeHandle, Vec2), HostError> {
        let at = self.next_image_at;
        self.next_image_at = at.offset(0.0, IMAGE_STEP);

        let image = self.add_node(NodeKind::ImageTexture, at)?;
        let name = self.claim_image_name(material_name, file);
        let sampling = &self.config.sampling;
        let colorspace = if channel.is_colour() {
            COLORSPACE_SRGB
        } else {
            COLORSPACE_NON_COLOR
        };
        let settings = [
            (property::LABEL, PropertyValue::from(channel.to_string())),
            (
                property::IMAGE_PATH,
                PropertyValue::from(file.path.to_string_lossy().into_owned()),
            ),
            (property::IMAGE_NAME, PropertyValue::from(name)),
            (property::COLORSPACE, PropertyValue::from(colorspace)),
            (
                property::INTERPOLATION,
                PropertyValue::from(sampling.interpolation.as_str()),
            ),
            (property::PROJECTION, PropertyValue::from(sampling.projection.as_str())),
            (property::EXTENSION, PropertyValue::from(sampling.extension.as_str())),
            (property::PROJECTION_BLEND, PropertyValue::from(sampling.blend)),
        ];
        for (key, value) in settings {
            self.host.set_property(image, key, value)?;
        }
        self.host.connect(routing, socket::OUTPUT, image, socket::VECTOR)?;
        debug!("{} image node for {}", channel, file.file_name());
        Ok((image, at))
    }

    fn claim_image_name(&mut self, material_name: &str, file: &ComponentFile) -> String {
        let base = image_name(material_name, file);
        let seen = self.image_names.entry(base.clone()).or_insert(0);
        *seen += 1;
        match *seen {
            1 => base,
            n => format!("{}_{}", base, n),
        }
    }

    fn rollback(&mut self) {
        for handle in self.created.drain(..).rev() {
            if let Err(err) = self.host.remove_node(handle) {
                warn!("Could not remove node {} after failed build: {}", handle, err);
            }
        }
    }
}
