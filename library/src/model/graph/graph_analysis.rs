//! Graph analysis utilities for material graphs.

use std::collections::{HashSet, VecDeque};
use uuid::Uuid;

use super::connection::{Connection, PinId};
use super::material_graph::MaterialGraph;

/// Validate a connection before adding it.
///
/// Checks:
/// - Both nodes exist
/// - No self-connections
/// - No second connection into the same input socket
/// - No cycles
pub fn validate_connection(graph: &MaterialGraph, conn: &Connection) -> Result<(), String> {
    if graph.get_node(conn.from.node_id).is_none() {
        return Err(format!("Source node {} not found", conn.from.node_id));
    }
    if graph.get_node(conn.to.node_id).is_none() {
        return Err(format!("Destination node {} not found", conn.to.node_id));
    }

    if conn.from.node_id == conn.to.node_id {
        return Err("Cannot connect a node to itself".to_string());
    }

    if graph
        .connections
        .iter()
        .any(|c| c.to == conn.to && c.id != conn.id)
    {
        return Err(format!(
            "Input socket {}.{} already has a connection",
            conn.to.node_id, conn.to.pin_name
        ));
    }

    if would_create_cycle(graph, conn.from.node_id, conn.to.node_id) {
        return Err("Connection would create a cycle".to_string());
    }

    Ok(())
}

/// Check if connecting from_node → to_node would create a cycle.
/// Returns true if to_node can already reach from_node via existing connections.
fn would_create_cycle(graph: &MaterialGraph, from_node: Uuid, to_node: Uuid) -> bool {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(to_node);

    while let Some(current) = queue.pop_front() {
        if current == from_node {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        for conn in &graph.connections {
            if conn.from.node_id == current {
                queue.push_back(conn.to.node_id);
            }
        }
    }
    false
}

/// Get the connection feeding into a specific input socket.
pub fn get_input_connection<'a>(graph: &'a MaterialGraph, pin: &PinId) -> Option<&'a Connection> {
    graph.connections.iter().find(|c| &c.to == pin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NodeGraphHost;
    use crate::nodes::{NodeKind, socket};

    #[test]
    fn test_validate_connection_self_loop() {
        let mut graph = MaterialGraph::new();
        let node = graph.create_node(NodeKind::Reroute).unwrap();

        let conn = Connection::new(
            PinId::new(node.0, socket::OUTPUT),
            PinId::new(node.0, socket::INPUT),
        );
        let result = validate_connection(&graph, &conn);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("itself"));
    }

    #[test]
    fn test_cycle_detection() {
        let mut graph = MaterialGraph::new();
        let a = graph.create_node(NodeKind::Reroute).unwrap();
        let b = graph.create_node(NodeKind::Reroute).unwrap();
        graph.connect(a, socket::OUTPUT, b, socket::INPUT).unwrap();

        let cyclic = Connection::new(
            PinId::new(b.0, socket::OUTPUT),
            PinId::new(a.0, socket::INPUT),
        );
        let result = validate_connection(&graph, &cyclic);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cycle"));
    }
}
