pub mod node_definitions;
pub mod node_types;
pub mod registry;

pub use node_definitions::socket;
pub use node_types::{NodeCategory, NodeKind, NodeTypeDefinition};
pub use registry::NodeTypeRegistry;
