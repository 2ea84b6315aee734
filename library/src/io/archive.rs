//! Thin wrapper around an external archive unpacker.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::LibraryError;

pub const DEFAULT_UNPACKER: &str = "unar";

/// Resource-fork folder added by macOS archivers.
const MACOS_METADATA_DIR: &str = "__MACOSX";

/// Unpacks archives by running `unar -q -D <archive>` in a target directory.
#[derive(Debug, Clone)]
pub struct ArchiveExtractor {
    program: String,
}

impl Default for ArchiveExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_UNPACKER)
    }
}

impl ArchiveExtractor {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Extracts `archive` into `dest` and returns the extracted files,
    /// sorted by path.
    pub fn extract(&self, archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, LibraryError> {
        let archive = archive.canonicalize()?;
        info!("Extracting {} with {}", archive.display(), self.program);

        // -q and -D must be given separately.
        let status = Command::new(&self.program)
            .arg("-q")
            .arg("-D")
            .arg(&archive)
            .current_dir(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                LibraryError::Extraction(format!("cannot run {}: {}", self.program, e))
            })?;
        if !status.success() {
            return Err(LibraryError::Extraction(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        list_files(dest)
    }
}

/// All regular files below `dir`, sorted by path. Hidden entries and macOS
/// metadata folders are left out.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') || name == MACOS_METADATA_DIR {
                debug!("Ignoring {}", entry.path().display());
                continue;
            }
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }
    files.sort();
    debug!("{} file(s) under {}", files.len(), dir.display());
    Ok(files)
}
