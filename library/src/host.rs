//! The node-graph capability the importer builds into.

use crate::error::HostError;
use crate::model::graph::graph_node::NodeHandle;
use crate::model::graph::property::PropertyValue;
use crate::nodes::NodeKind;

/// Node creation and linking, as offered by whatever owns the shading graph.
///
/// The graph builder only talks to the host through this trait, so the
/// pipeline runs the same against the in-memory [`MaterialGraph`] and an
/// embedding application.
///
/// [`MaterialGraph`]: crate::model::graph::MaterialGraph
pub trait NodeGraphHost {
    fn create_node(&mut self, kind: NodeKind) -> Result<NodeHandle, HostError>;

    fn connect(
        &mut self,
        from: NodeHandle,
        from_socket: &str,
        to: NodeHandle,
        to_socket: &str,
    ) -> Result<(), HostError>;

    fn set_property(
        &mut self,
        node: NodeHandle,
        key: &str,
        value: PropertyValue,
    ) -> Result<(), HostError>;

    /// Removes a node and every link touching it.
    fn remove_node(&mut self, node: NodeHandle) -> Result<(), HostError>;
}
