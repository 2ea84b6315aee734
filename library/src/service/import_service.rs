use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use crate::error::LibraryError;
use crate::io::archive::{ArchiveExtractor, list_files};
use crate::model::config::ImportConfiguration;
use crate::model::graph::MaterialGraph;
use crate::model::material::{Material, material_name_for};
use crate::nodes::NodeTypeRegistry;
use crate::pipeline::{self, ResolvedAssignment};
use crate::util::timing::{measure_debug, measure_info};

/// A finished import: the material plus the assignment it was built from.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub material: Material,
    pub assignment: ResolvedAssignment,
}

/// Entry point for "import texture material" actions.
///
/// Each import builds into a fresh [`MaterialGraph`], so a failed import
/// leaves nothing behind.
pub struct ImportService {
    registry: Arc<NodeTypeRegistry>,
    extractor: ArchiveExtractor,
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new(ArchiveExtractor::default())
    }
}

impl ImportService {
    pub fn new(extractor: ArchiveExtractor) -> Self {
        Self {
            registry: Arc::new(NodeTypeRegistry::with_builtin_types()),
            extractor,
        }
    }

    pub fn with_registry(mut self, registry: Arc<NodeTypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Imports an already listed texture set.
    pub fn import_files(
        &self,
        material_name: &str,
        files: &[PathBuf],
        config: &ImportConfiguration,
    ) -> Result<ImportResult, LibraryError> {
        measure_info(format!("Import '{}'", material_name), || {
            let mut graph = MaterialGraph::with_registry(self.registry.clone());
            let (assignment, nodes) = pipeline::run(material_name, files, config, &mut graph)?;
            info!(
                "Material '{}': {} node(s), {} link(s)",
                material_name,
                graph.nodes.len(),
                graph.connections.len()
            );
            Ok(ImportResult {
                material: Material {
                    name: material_name.to_string(),
                    graph,
                    nodes,
                },
                assignment,
            })
        })
    }

    /// Imports every file below an extracted directory.
    pub fn import_directory(
        &self,
        material_name: &str,
        dir: &Path,
        config: &ImportConfiguration,
    ) -> Result<ImportResult, LibraryError> {
        let files = list_files(dir)?;
        self.import_files(material_name, &files, config)
    }

    /// Unpacks `archive` into `workdir` and imports the result. The material
    /// is named after the archive.
    pub fn import_archive(
        &self,
        archive: &Path,
        workdir: &Path,
        config: &ImportConfiguration,
    ) -> Result<ImportResult, LibraryError> {
        self.import_archive_as(&material_name_for(archive), archive, workdir, config)
    }

    pub fn import_archive_as(
        &self,
        material_name: &str,
        archive: &Path,
        workdir: &Path,
        config: &ImportConfiguration,
    ) -> Result<ImportResult, LibraryError> {
        let files = measure_debug(format!("Extract {}", archive.display()), || {
            self.extractor.extract(archive, workdir)
        })?;
        self.import_files(material_name, &files, config)
    }
}
