// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::{
    generate_directions, search, synthesize_graph, Coordinate, Direction, Node, NodeId, Policy,
    RouteError, SearchTree,
};

/// What the route search should minimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteType {
    /// Minimize the great-circle length of the route.
    Shortest,

    /// Minimize the length weighted by a simulated, random per-edge safety penalty.
    Safest,
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortest => f.write_str("shortest"),
            Self::Safest => f.write_str("safest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route type {0:?}, expected \"shortest\" or \"safest\"")]
pub struct ParseRouteTypeError(String);

impl FromStr for RouteType {
    type Err = ParseRouteTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shortest" => Ok(Self::Shortest),
            "safest" => Ok(Self::Safest),
            _ => Err(ParseRouteTypeError(s.to_string())),
        }
    }
}

/// A planned route, ready to be displayed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteResult {
    /// Nodes to visit, starting with the source and ending with the destination.
    /// Contains a single node if the source and destination are the same.
    pub path: Vec<Node>,

    /// Great-circle length of the route, in kilometers.
    pub total_distance_km: f64,

    /// Estimated travel time, in minutes.
    pub total_time_minutes: f64,

    pub directions: Vec<Direction>,

    /// Human-readable description of how the route was found.
    pub algorithm: String,
}

/// Walks back the [SearchTree] from `to_id` to `from_id`, and returns
/// the ids of nodes along the cheapest path (starting with `from_id`).
///
/// Returns [RouteError::UnreachableDestination] if the chain of predecessors
/// doesn't lead back to `from_id`.
pub fn reconstruct_path(
    tree: &SearchTree,
    from_id: NodeId,
    to_id: NodeId,
) -> Result<Vec<NodeId>, RouteError> {
    if tree.distance_to(to_id).is_infinite() {
        return Err(RouteError::UnreachableDestination);
    }

    let mut path = vec![to_id];
    let mut last = to_id;

    while let Some(nd) = tree.predecessor(last) {
        path.push(nd);
        last = nd;

        // A well-formed tree never has more predecessor links than reached nodes
        if path.len() > tree.reached() {
            return Err(RouteError::UnreachableDestination);
        }
    }

    if last != from_id {
        return Err(RouteError::UnreachableDestination);
    }

    path.reverse();
    Ok(path)
}

/// Sums the great-circle distances between consecutive nodes, in kilometers.
pub fn total_distance_km(path: &[Node]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Estimates the time (in minutes) to travel `distance_km` at the policy's average speed.
pub fn travel_time_minutes(distance_km: f64, policy: &Policy) -> f64 {
    distance_km * 60.0 / policy.average_speed_kmh
}

/// Plans a route between two points.
///
/// A waypoint graph is [synthesized](crate::synthesize_graph) between the points,
/// [searched](crate::search) with Dijkstra's algorithm, and the resulting path
/// is turned into [directions](crate::generate_directions). `rng` drives the waypoint jitter
/// and safety penalties; pass a seeded generator for reproducible results.
///
/// If both coordinates share the same position, a single-node route with
/// zero distance and no directions is returned.
pub fn compute_route<R: Rng + ?Sized>(
    source: &Coordinate,
    destination: &Coordinate,
    route_type: RouteType,
    policy: &Policy,
    rng: &mut R,
) -> Result<RouteResult, RouteError> {
    policy.validate()?;
    source.validate()?;
    destination.validate()?;

    let algorithm = format!("Dijkstra ({})", route_type);

    if source.same_position(destination) {
        debug!("{} and {} share the same position", source.name, destination.name);
        return Ok(RouteResult {
            path: vec![Node::from_coordinate(NodeId::Source, source)],
            total_distance_km: 0.0,
            total_time_minutes: 0.0,
            directions: Vec::default(),
            algorithm,
        });
    }

    let g = synthesize_graph(source, destination, route_type, policy, rng)?;
    let tree = search(&g, NodeId::Source, NodeId::Destination)?;
    let ids = reconstruct_path(&tree, NodeId::Source, NodeId::Destination)?;

    let path = ids
        .into_iter()
        .map(|id| g.get_node(id).cloned().ok_or(RouteError::InvalidReference(id)))
        .collect::<Result<Vec<Node>, RouteError>>()?;

    let total_distance_km = total_distance_km(&path);
    let total_time_minutes = travel_time_minutes(total_distance_km, policy);
    let directions = generate_directions(&path);

    debug!(
        "{} route {} -> {}: {} nodes, {:.1} km, {:.0} min",
        route_type,
        source.name,
        destination.name,
        path.len(),
        total_distance_km,
        total_time_minutes
    );

    Ok(RouteResult {
        path,
        total_distance_km,
        total_time_minutes,
        directions,
        algorithm,
    })
}

/// Plans a route with the [default policy](crate::DEFAULT_POLICY)
/// and the thread-local random number generator.
pub fn compute_route_default(
    source: &Coordinate,
    destination: &Coordinate,
    route_type: RouteType,
) -> Result<RouteResult, RouteError> {
    compute_route(
        source,
        destination,
        route_type,
        &Policy::default(),
        &mut rand::rng(),
    )
}
