//! Builds shader material graphs from the component images of a texture
//! archive.
//!
//! File names such as `bark_brown_02_diff_1k.png` are split into a shared
//! basename and a channel suffix, the channels are filtered and prioritised
//! according to an [`ImportConfiguration`], and the result is wired into a
//! principled shader through any [`NodeGraphHost`].

pub mod error;
pub mod host;
pub mod io;
pub mod model;
pub mod nodes;
pub mod pipeline;
pub mod service;
pub mod util;

pub use error::{HostError, LibraryError};
pub use host::NodeGraphHost;
pub use model::graph::{MaterialGraph, NodeHandle};
pub use model::{Channel, ImportConfiguration, Material};
pub use pipeline::ResolvedAssignment;
pub use service::{ImportResult, ImportService};
