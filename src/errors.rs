use crate::model::NodeId;
use thiserror::Error;


/// Errors raised while building a route model or planning a route
#[derive(Debug, Error)]
pub enum RoutePlannerError {
    /// The open list emptied before the end node was reached
    #[error("no path found between start and end nodes")]
    NoPathFound,

    /// Nearest node lookup on a model without nodes
    #[error("route model contains no nodes")]
    EmptyModel,

    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("metric scale must be finite and positive, got {0}")]
    InvalidMetricScale(f64),

    #[error("node {0} does not exist in the route model")]
    UnknownNode(NodeId),

    /// Parent chain is missing a link or loops back on itself
    #[error("parent chain broken at node {0}")]
    BrokenParentChain(NodeId),

    #[error("kd-tree error: {0}")]
    KdTree(String),
}


impl From<kdtree::ErrorKind> for RoutePlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        RoutePlannerError::KdTree(error.to_string())
    }
}
