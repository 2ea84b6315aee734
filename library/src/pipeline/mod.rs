//! Classify → resolve → build, in a single pass.

pub mod build;
pub mod classify;
pub mod resolve;

use std::path::PathBuf;

use crate::error::LibraryError;
use crate::host::NodeGraphHost;
use crate::model::config::ImportConfiguration;
use crate::model::material::BuiltMaterial;

pub use build::GraphBuilder;
pub use classify::{ClassifiedSet, classify, parse_file_name};
pub use resolve::{ResolvedAssignment, resolve};

/// Runs the whole pipeline against `host`.
///
/// Any failure stops the remaining stages. Nothing is created in the host
/// before classification and resolution succeed, and a failed build removes
/// what it created.
pub fn run<H: NodeGraphHost + ?Sized>(
    material_name: &str,
    files: &[PathBuf],
    config: &ImportConfiguration,
    host: &mut H,
) -> Result<(ResolvedAssignment, BuiltMaterial), LibraryError> {
    let classified = classify(files)?;
    let assignment = resolve(&classified, config)?;
    let built = GraphBuilder::new(host, config).build(material_name, &assignment)?;
    Ok((assignment, built))
}
