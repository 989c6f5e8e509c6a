pub mod a_star;
mod open_list;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::model::NodeId;


/// Search annotations for a single node during one search
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeState {
    pub g: f64, // cost from the start node
    pub h: f64, // estimated cost to the end node
    pub parent: Option<NodeId>, // node this one was reached from, None for the start node
    pub visited: bool, // discovered and handed to the open list
    pub expanded: bool, // neighbors already discovered, cost is final
}

impl NodeState {

    pub fn new(g: f64, h: f64, parent: Option<NodeId>) -> Self {
        Self {
            g,
            h,
            parent,
            visited: true,
            expanded: false,
        }
    }
}


/// Side table of search annotations keyed by node handle
/// Lives in the search session, never on the shared graph
pub(crate) type NodeStateMap = FxIndexMap<NodeId, NodeState>;
