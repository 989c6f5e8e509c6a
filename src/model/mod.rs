use std::fmt;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;

use crate::errors::RoutePlannerError;
use crate::geometry::Point;


/// Handle of a node inside a route graph
/// Handles are indexes into the graph's node table and never own the node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// Graph collaborator consumed by the route planner
///
/// Implementors own the nodes; the planner only holds `NodeId` handles and
/// keeps its search annotations on the side, so one graph can serve any
/// number of independent searches.
pub trait RouteGraph {

    /// Whether `node` was issued by this graph
    fn contains(&self, node: NodeId) -> bool;

    /// Node closest to a point given in normalized (0.0 - 1.0) coordinates
    fn find_closest_node(&self, point: &Point) -> Result<NodeId, RoutePlannerError>;

    /// Nodes directly reachable from `node`
    fn find_neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Position of a node issued by this graph
    fn position(&self, node: NodeId) -> Point;

    /// Factor converting raw distance units to meters
    fn metric_scale(&self) -> f64;

    /// Edge cost between two nodes, straight line distance by default
    fn distance(&self, from: NodeId, to: NodeId) -> f64 {
        self.position(from).distance(&self.position(to))
    }
}


/// In-memory road graph
/// Nodes are indexed in a kd-tree for nearest node queries, edges are undirected
pub struct RouteModel {
    nodes: Vec<Point>,
    adjacency: Vec<Vec<NodeId>>,
    tree: KdTree<f64, NodeId, [f64; 2]>, // point -> node id
    metric_scale: f64,
}

impl fmt::Debug for RouteModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteModel")
            .field("nodes", &self.nodes.len())
            .field("metric_scale", &self.metric_scale)
            .finish()
    }
}

impl RouteModel {

    /// Create an empty model
    /// metric_scale: meters per raw distance unit, must be finite and positive
    pub fn new(metric_scale: f64) -> Result<Self, RoutePlannerError> {
        if !metric_scale.is_finite() || metric_scale <= 0.0 {
            return Err(RoutePlannerError::InvalidMetricScale(metric_scale));
        }

        Ok(Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            tree: KdTree::new(2),
            metric_scale,
        })
    }

    /// Add a node at a normalized position and return its handle
    pub fn add_node(&mut self, point: Point) -> Result<NodeId, RoutePlannerError> {
        if !point.is_finite() {
            return Err(RoutePlannerError::NonFiniteCoordinate { x: point.x, y: point.y });
        }

        let id = NodeId(self.nodes.len());
        self.tree.add(point.as_array(), id)?;
        self.nodes.push(point);
        self.adjacency.push(Vec::new());

        Ok(id)
    }

    /// Connect two nodes in both directions
    /// Self loops and duplicate edges are ignored
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), RoutePlannerError> {
        self.check_node(a)?;
        self.check_node(b)?;

        if a == b {
            return Ok(());
        }

        if !self.adjacency[a.0].contains(&b) {
            self.adjacency[a.0].push(b);
        }
        if !self.adjacency[b.0].contains(&a) {
            self.adjacency[b.0].push(a);
        }

        Ok(())
    }

    /// Connect consecutive nodes of a road polyline
    pub fn add_way(&mut self, way: &[NodeId]) -> Result<(), RoutePlannerError> {
        for node in way {
            self.check_node(*node)?;
        }

        for pair in way.windows(2) {
            self.add_edge(pair[0], pair[1])?;
        }

        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    fn check_node(&self, node: NodeId) -> Result<(), RoutePlannerError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(RoutePlannerError::UnknownNode(node))
        }
    }
}

impl RouteGraph for RouteModel {

    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    fn find_closest_node(&self, point: &Point) -> Result<NodeId, RoutePlannerError> {
        if !point.is_finite() {
            return Err(RoutePlannerError::NonFiniteCoordinate { x: point.x, y: point.y });
        }

        let closest: Vec<(f64, &NodeId)> = self.tree.nearest(&point.as_array(), 1, &kt_squared_euclidean)?;
        match closest.first() {
            Some((_, id)) => Ok(**id),
            None => Err(RoutePlannerError::EmptyModel),
        }
    }

    fn find_neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.adjacency.get(node.0).cloned().unwrap_or_default()
    }

    fn position(&self, node: NodeId) -> Point {
        self.nodes[node.0]
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}
