pub mod connection;
pub mod graph_analysis;
pub mod graph_node;
pub mod material_graph;
pub mod property;

pub use connection::{Connection, PinId};
pub use graph_node::{GraphNode, NodeHandle};
pub use material_graph::MaterialGraph;
pub use property::{PropertyMap, PropertyValue, Vec2};
