use crate::errors::RoutePlannerError;
use crate::model::{NodeId, RouteGraph};
use super::NodeStateMap;
use super::a_star::RouteNode;

/// Construct the path from the start node to the goal node by following parent links
/// Returns the ordered path (start first, goal last) and its raw, unscaled length
/// node_states: NodeStateMap - search annotations holding each node's parent
/// start: NodeId - walk stops when this node is reached, compared by identity
/// goal: NodeId - node the walk begins at
pub(crate) fn shortest_path<G>(graph: &G, node_states: &NodeStateMap, start: NodeId, goal: NodeId) -> Result<(Vec<RouteNode>, f64), RoutePlannerError>
where
    G: RouteGraph + ?Sized,
{

    let mut path = Vec::new();
    let mut distance = 0.0;
    let mut current = goal;

    // Trace back from goal to start
    // a valid chain visits each annotated node at most once
    while current != start {
        if path.len() > node_states.len() {
            tracing::error!(node = %current, "parent chain loops back on itself");
            return Err(RoutePlannerError::BrokenParentChain(current));
        }

        let Some(parent) = node_states.get(&current).and_then(|state| state.parent) else {
            tracing::error!(node = %current, "parent chain ends before the start node");
            return Err(RoutePlannerError::BrokenParentChain(current));
        };

        path.push(RouteNode::new(current, graph.position(current)));
        distance += graph.distance(current, parent);
        current = parent;
    }
    path.push(RouteNode::new(current, graph.position(current)));

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok((path, distance))
}
