pub mod channel;
pub mod component;
pub mod config;
pub mod graph;
pub mod material;

pub use channel::Channel;
pub use component::{ClassifiedFile, ComponentFile};
pub use config::{
    AmbientOcclusionMode, DisplacementUsage, Extension, ImportConfiguration, Interpolation,
    Projection, SamplingSettings,
};
pub use material::{BuiltMaterial, DetachedTexture, DisplacementMethod, Material};
