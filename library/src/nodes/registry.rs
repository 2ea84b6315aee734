use std::collections::HashMap;

use log::debug;

use super::node_definitions::register_all_node_types;
use super::node_types::NodeTypeDefinition;

/// Node type definitions keyed by type id.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeRegistry {
    node_types: HashMap<String, NodeTypeDefinition>,
}

impl NodeTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the shader node types the builder uses.
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        register_all_node_types(&mut registry);
        registry
    }

    pub fn register(&mut self, def: NodeTypeDefinition) {
        debug!("Registering node type {}", def.type_id);
        self.node_types.insert(def.type_id.clone(), def);
    }

    pub fn get(&self, type_id: &str) -> Option<&NodeTypeDefinition> {
        self.node_types.get(type_id)
    }
}
