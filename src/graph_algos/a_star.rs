use crate::errors::RoutePlannerError;
use crate::geometry::Point;
use crate::model::{NodeId, RouteGraph};
use super::open_list::OpenList;
use super::{shortest_path, NodeState, NodeStateMap};

use indexmap::map::Entry::{Occupied, Vacant};


/// How discovered nodes are treated when they are reached again
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// A discovered node gets a new parent when a cheaper path to it is found
    /// and is pushed onto the open list again. Optimal for consistent heuristics.
    #[default]
    Relax,
    /// A node is marked visited the moment it is discovered and is never
    /// reconsidered, the first path found to it is kept even if a cheaper one exists.
    MarkOnDiscovery,
}


/// Configuration for the route planner
#[derive(Clone, Debug, Default)]
pub struct PlannerConfig {
    pub expansion: ExpansionPolicy,
}


/// Where a search session stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Open list still holds nodes, goal not dequeued yet
    Searching,
    /// Goal dequeued and final path built
    Found,
    /// Open list emptied without reaching the goal
    Exhausted,
}


/// Snapshot of a node on the final path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteNode {
    pub id: NodeId,
    pub point: Point,
}

impl RouteNode {
    pub fn new(id: NodeId, point: Point) -> Self {
        Self { id, point }
    }
}


/// Result of a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub nodes: Vec<RouteNode>, // start first, end last
    pub distance: f64, // total length in meters
}


/// A* route planner
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// A planner is one search session between two fixed nodes of a graph. The
/// endpoints are resolved once on construction, every call to
/// [`RoutePlanner::a_star_search`] starts from clean annotations.
///
/// The heuristic is the straight line distance to the end node, which is
/// admissible and consistent as long as the graph's edge costs are at least
/// the straight line distance between their endpoints.
pub struct RoutePlanner<'a, G: RouteGraph + ?Sized> {
    model: &'a G,
    config: PlannerConfig,
    start_node: NodeId,
    end_node: NodeId,
    open_list: OpenList,
    node_states: NodeStateMap,
    state: SearchState,
    distance: f64,
}

impl<'a, G: RouteGraph + ?Sized> RoutePlanner<'a, G> {

    /// Create a planner from start and end coordinates given as percentages (0 - 100) of the map
    /// Both points are snapped to the closest node of the model
    pub fn new(model: &'a G, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Result<Self, RoutePlannerError> {
        Self::with_config(model, start_x, start_y, end_x, end_y, PlannerConfig::default())
    }

    /// Same as [`RoutePlanner::new`] with an explicit configuration
    pub fn with_config(model: &'a G, start_x: f64, start_y: f64, end_x: f64, end_y: f64, config: PlannerConfig) -> Result<Self, RoutePlannerError> {
        let start_point = Point::from_percent(start_x, start_y);
        let end_point = Point::from_percent(end_x, end_y);

        let start_node = model.find_closest_node(&start_point)?;
        let end_node = model.find_closest_node(&end_point)?;

        tracing::debug!(
            start = %start_node,
            end = %end_node,
            "resolved route endpoints from ({}, {}) to ({}, {})",
            start_point.x, start_point.y, end_point.x, end_point.y
        );

        Self::between_with_config(model, start_node, end_node, config)
    }

    /// Create a planner between two nodes of the model
    /// Fails with `UnknownNode` if either handle was not issued by the model
    pub fn between(model: &'a G, start_node: NodeId, end_node: NodeId) -> Result<Self, RoutePlannerError> {
        Self::between_with_config(model, start_node, end_node, PlannerConfig::default())
    }

    pub fn between_with_config(model: &'a G, start_node: NodeId, end_node: NodeId, config: PlannerConfig) -> Result<Self, RoutePlannerError> {
        for node in [start_node, end_node] {
            if !model.contains(node) {
                return Err(RoutePlannerError::UnknownNode(node));
            }
        }

        Ok(Self {
            model,
            config,
            start_node,
            end_node,
            open_list: OpenList::default(),
            node_states: NodeStateMap::default(),
            state: SearchState::Searching,
            distance: 0.0,
        })
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Scaled length of the last path built, 0.0 if none
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Heuristic: straight line distance from a node to the end node
    pub fn calculate_h_value(&self, node: NodeId) -> f64 {
        self.model.distance(node, self.end_node)
    }

    /// Expand a node: discover its neighbors, assign their costs and push them onto the open list
    pub fn add_neighbors(&mut self, current: NodeId) {

        let current_g = match self.node_states.get_mut(&current) {
            Some(state) => {
                if state.expanded {
                    // neighbors are discovered once per node and search
                    return;
                }
                state.visited = true;
                state.expanded = true;
                state.g
            }
            None => {
                let h = self.calculate_h_value(current);
                let mut state = NodeState::new(0.0, h, None);
                state.expanded = true;
                self.node_states.insert(current, state);
                0.0
            }
        };

        let neighbors = self.model.find_neighbors(current);
        tracing::trace!(node = %current, g = current_g, neighbors = neighbors.len(), open = self.open_list.len(), "expanding node");

        for neighbor in neighbors {

            // new cost to reach the neighbor through the current node
            let new_g = current_g + self.model.distance(current, neighbor);
            let h = self.calculate_h_value(neighbor);

            match self.node_states.entry(neighbor) {
                Vacant(e) => {
                    // first time this neighbor is seen
                    e.insert(NodeState::new(new_g, h, Some(current)));
                }
                Occupied(mut e) => {
                    let state = e.get_mut();
                    let reopen = match self.config.expansion {
                        ExpansionPolicy::Relax => !state.expanded && new_g < state.g,
                        ExpansionPolicy::MarkOnDiscovery => !state.visited,
                    };
                    if !reopen {
                        continue;
                    }
                    state.g = new_g;
                    state.h = h;
                    state.parent = Some(current);
                }
            }

            self.open_list.push(neighbor, new_g, h);
        }
    }

    /// Remove and return the open node with the lowest f = g + h
    /// Ties go to the lowest h, then to the node pushed first
    /// Entries superseded by a cheaper path or already expanded are skipped
    pub fn next_node(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open_list.pop() {
            match self.node_states.get(&entry.node) {
                Some(state) if state.expanded || entry.g > state.g => continue,
                Some(state) => {
                    tracing::trace!(node = %entry.node, f = state.g + state.h, "selected next node");
                    return Some(entry.node);
                }
                None => return Some(entry.node),
            }
        }
        None
    }

    /// Build the final path by walking parent links back from `current` to the start node
    /// Records the scaled total distance on the planner
    pub fn construct_final_path(&mut self, current: NodeId) -> Result<Vec<RouteNode>, RoutePlannerError> {
        self.distance = 0.0;

        let (path, raw_distance) = shortest_path(self.model, &self.node_states, self.start_node, current)?;

        // scale raw map units to meters
        self.distance = raw_distance * self.model.metric_scale();

        Ok(path)
    }

    /// Run A* from the start node until the end node is dequeued or the open list is empty
    pub fn a_star_search(&mut self) -> Result<Route, RoutePlannerError> {
        self.reset();

        let h = self.calculate_h_value(self.start_node);
        self.node_states.insert(self.start_node, NodeState::new(0.0, h, None));
        self.open_list.push(self.start_node, 0.0, h);

        let mut expanded = 0usize;

        while let Some(current) = self.next_node() {

            if current == self.end_node {
                let nodes = self.construct_final_path(current)?;
                self.state = SearchState::Found;

                tracing::debug!(
                    expanded,
                    nodes = nodes.len(),
                    distance = self.distance,
                    "route found"
                );

                return Ok(Route {
                    nodes,
                    distance: self.distance,
                });
            }

            self.add_neighbors(current);
            expanded += 1;
        }

        self.state = SearchState::Exhausted;
        tracing::warn!(
            start = %self.start_node,
            end = %self.end_node,
            expanded,
            "open list exhausted, end node unreachable"
        );

        Err(RoutePlannerError::NoPathFound)
    }

    fn reset(&mut self) {
        self.open_list.clear();
        self.node_states.clear();
        self.state = SearchState::Searching;
        self.distance = 0.0;
    }
}
