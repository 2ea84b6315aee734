use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Configuration could not be written: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("Basename mismatch: expected '{expected}', found '{found}' ({file})")]
    BasenameMismatch {
        expected: String,
        found: String,
        file: String,
    },
    #[error("No suitable texture components found.")]
    NoRecognizedComponents,
    #[error("Graph construction failed: {0}")]
    GraphConstruction(#[from] HostError),
    #[error("Archive extraction failed: {0}")]
    Extraction(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failure reported by a node-graph host while the material is being built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("cannot create node of type '{type_id}': {reason}")]
    NodeCreation { type_id: String, reason: String },
    #[error("node {0} not found")]
    UnknownNode(Uuid),
    #[error("node type '{type_id}' has no {direction} socket '{socket}'")]
    UnknownSocket {
        type_id: String,
        socket: String,
        direction: &'static str,
    },
    #[error("invalid connection: {0}")]
    InvalidConnection(String),
    #[error("{0}")]
    Other(String),
}
