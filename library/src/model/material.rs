//! The material entity handed to the host after a successful import.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::channel::Channel;
use super::graph::{MaterialGraph, NodeHandle};

/// How the renderer should treat the displacement terminal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplacementMethod {
    #[default]
    Bump,
    Displacement,
    Both,
}

/// An image loaded outside the node graph (displacement used by a modifier).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DetachedTexture {
    pub name: String,
    pub path: PathBuf,
}

/// Handles to everything the graph builder created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BuiltMaterial {
    pub coordinates: NodeHandle,
    pub mapping: NodeHandle,
    /// Shared routing point feeding every image node's coordinates.
    pub routing: NodeHandle,
    pub shader: NodeHandle,
    pub output: NodeHandle,
    pub images: BTreeMap<Channel, NodeHandle>,
    /// Normal map, bump and AO multiply nodes, keyed by the channel they convert.
    pub converters: BTreeMap<Channel, NodeHandle>,
    /// Image nodes for unused files, not wired to anything downstream.
    pub extras: Vec<NodeHandle>,
    pub active_geometry: Option<Channel>,
    pub displacement_method: DisplacementMethod,
    pub detached_textures: Vec<DetachedTexture>,
}

impl BuiltMaterial {
    /// Every image node, wired or not.
    pub fn image_nodes(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.images.values().chain(self.extras.iter()).copied()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Material {
    pub name: String,
    pub graph: MaterialGraph,
    pub nodes: BuiltMaterial,
}

impl Material {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Material name for an archive: its file name without the last extension.
pub fn material_name_for(archive: &Path) -> String {
    archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Material".to_string())
}
