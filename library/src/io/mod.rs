pub mod archive;

pub use archive::{ArchiveExtractor, list_files};
