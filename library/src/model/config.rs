//! User-tunable import options.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::channel::Channel;
use crate::error::LibraryError;

/// Texture filtering applied by every image node.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    Closest,
    Cubic,
    Smart,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    #[default]
    Flat,
    Box,
    Sphere,
    Tube,
}

/// How images are sampled outside the 0..1 coordinate range.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Extension {
    #[default]
    Repeat,
    Extend,
    Clip,
}

/// What happens to an included ambient occlusion map.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AmbientOcclusionMode {
    /// Create the image node but leave its output free.
    Unconnected,
    /// Multiply into the diffuse colour before it reaches the shader.
    #[default]
    Multiply,
}

/// How a selected displacement map is used.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplacementUsage {
    /// Never use displacement, even when it is the only geometry map.
    Disabled,
    /// Wire into the material output's displacement terminal.
    #[default]
    Material,
    /// Load as a separate texture, for use by a displacement modifier.
    Texture,
}

macro_rules! impl_choice {
    ($ty:ty, $what:literal, [$($name:literal => $variant:path),+ $(,)?]) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = LibraryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    other => Err(LibraryError::InvalidArgument(format!(
                        concat!("unknown ", $what, " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

impl_choice!(Interpolation, "interpolation", [
    "linear" => Interpolation::Linear,
    "closest" => Interpolation::Closest,
    "cubic" => Interpolation::Cubic,
    "smart" => Interpolation::Smart,
]);
impl_choice!(Projection, "projection", [
    "flat" => Projection::Flat,
    "box" => Projection::Box,
    "sphere" => Projection::Sphere,
    "tube" => Projection::Tube,
]);
impl_choice!(Extension, "extension", [
    "repeat" => Extension::Repeat,
    "extend" => Extension::Extend,
    "clip" => Extension::Clip,
]);
impl_choice!(AmbientOcclusionMode, "ambient occlusion mode", [
    "unconnected" => AmbientOcclusionMode::Unconnected,
    "multiply" => AmbientOcclusionMode::Multiply,
]);
impl_choice!(DisplacementUsage, "displacement usage", [
    "disabled" => DisplacementUsage::Disabled,
    "material" => DisplacementUsage::Material,
    "texture" => DisplacementUsage::Texture,
]);

/// Sampling settings copied onto every image node at creation time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SamplingSettings {
    pub interpolation: Interpolation,
    pub projection: Projection,
    pub extension: Extension,
    /// Edge blending for box projection, 0..=1.
    pub blend: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Linear,
            projection: Projection::Flat,
            extension: Extension::Repeat,
            blend: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ImportConfiguration {
    pub include_diffuse: bool,
    pub include_specular: bool,
    pub include_roughness: bool,
    pub include_alpha: bool,
    pub include_ambient_occlusion: bool,
    pub ambient_occlusion_mode: AmbientOcclusionMode,
    /// Create every present geometry map (plus unknown and duplicate files)
    /// as image nodes, not just the preferred one.
    pub load_unused_maps: bool,
    /// Preference among Normal, Bump and Displacement. Earlier wins; repeated
    /// entries have no further effect.
    pub geometry_priority: Vec<Channel>,
    pub displacement_usage: DisplacementUsage,
    pub sampling: SamplingSettings,
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            include_diffuse: true,
            include_specular: true,
            include_roughness: true,
            include_alpha: true,
            include_ambient_occlusion: false,
            ambient_occlusion_mode: AmbientOcclusionMode::default(),
            load_unused_maps: false,
            geometry_priority: Channel::GEOMETRY.to_vec(),
            displacement_usage: DisplacementUsage::default(),
            sampling: SamplingSettings::default(),
        }
    }
}

impl ImportConfiguration {
    pub fn from_toml_str(s: &str) -> Result<Self, LibraryError> {
        let config: ImportConfiguration = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, LibraryError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), LibraryError> {
        if let Some(bad) = self.geometry_priority.iter().find(|c| !c.is_geometry()) {
            return Err(LibraryError::InvalidArgument(format!(
                "'{}' cannot be used in the geometry priority",
                bad.id_str()
            )));
        }
        if !(0.0..=1.0).contains(&self.sampling.blend) {
            return Err(LibraryError::InvalidArgument(format!(
                "blend must lie in 0..=1, got {}",
                self.sampling.blend
            )));
        }
        Ok(())
    }

    /// Geometry priority with duplicates removed, and without Displacement
    /// when displacement is disabled.
    pub fn effective_geometry_priority(&self) -> Vec<Channel> {
        let mut order = Vec::with_capacity(Channel::GEOMETRY.len());
        for &channel in &self.geometry_priority {
            if channel == Channel::Displacement
                && self.displacement_usage == DisplacementUsage::Disabled
            {
                continue;
            }
            if !order.contains(&channel) {
                order.push(channel);
            }
        }
        order
    }

    /// Whether a present file of the given non-geometry channel is wanted.
    pub fn includes(&self, channel: Channel) -> bool {
        match channel {
            Channel::Diffuse => self.include_diffuse,
            Channel::Specular => self.include_specular,
            Channel::Roughness => self.include_roughness,
            Channel::Alpha => self.include_alpha,
            Channel::AmbientOcclusion => self.include_ambient_occlusion,
            Channel::Displacement => self.displacement_usage != DisplacementUsage::Disabled,
            Channel::Normal | Channel::Bump => true,
            Channel::Unknown => false,
        }
    }
}
