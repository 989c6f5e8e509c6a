//! A* route planning over road graphs derived from map data.
//!
//! A [`RoutePlanner`] snaps two map coordinates to their closest graph nodes
//! and searches the cheapest route between them. The graph is any type
//! implementing [`RouteGraph`]; [`RouteModel`] is an in-memory implementation
//! with kd-tree backed nearest-node lookup.

pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod model;
mod collections;

pub use errors::RoutePlannerError;
pub use geometry::Point;
pub use graph_algos::a_star::{ExpansionPolicy, PlannerConfig, Route, RouteNode, RoutePlanner, SearchState};
pub use model::{NodeId, RouteGraph, RouteModel};
