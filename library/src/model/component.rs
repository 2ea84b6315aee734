//! Component files read from an extracted texture archive.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::channel::Channel;

/// One image file of a texture set, split into its naming parts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComponentFile {
    pub path: PathBuf,
    /// Prefix shared by every file of the set, case preserved.
    pub basename: String,
    /// Suffix segment exactly as it appeared in the file name.
    pub raw_suffix: String,
    /// Pixel size from a trailing `_<n>k` marker (`n * 1024`).
    pub resolution: Option<u32>,
}

impl ComponentFile {
    /// Lower-cased suffix, used for image naming.
    pub fn alias(&self) -> String {
        self.raw_suffix.to_ascii_lowercase()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub file: ComponentFile,
    pub channel: Channel,
}

impl ClassifiedFile {
    pub fn new(file: ComponentFile) -> Self {
        let channel = Channel::from_alias(&file.raw_suffix);
        Self { file, channel }
    }
}
