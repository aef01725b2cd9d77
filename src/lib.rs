// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Route planning over small, synthesized waypoint graphs.
//!
//! Given two points on Earth, routesynth builds a road-like graph between them
//! (the endpoints plus a handful of jittered waypoints, all connected to each other),
//! runs Dijkstra's algorithm over it and turns the resulting path into
//! turn-by-turn [directions](Direction). This is not a real road router - paths are
//! only optimal over the synthesized graph.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//!
//! let new_york = routesynth::Coordinate::new(40.7128, -74.0060, "New York");
//! let london = routesynth::Coordinate::new(51.5074, -0.1278, "London");
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
//!
//! let route = routesynth::compute_route(
//!     &new_york,
//!     &london,
//!     routesynth::RouteType::Shortest,
//!     &routesynth::Policy::default(),
//!     &mut rng,
//! )
//! .expect("failed to compute route");
//!
//! for direction in &route.directions {
//!     println!("{} ({:.1} km)", direction.instruction, direction.distance_km);
//! }
//! ```

mod dijkstra;
mod directions;
mod distance;
mod error;
mod graph;
pub mod places;
mod policy;
mod route;
mod synth;

use std::fmt;

pub use dijkstra::{search, SearchTree};
pub use directions::{generate_directions, Direction, Maneuver};
pub use distance::{compass_direction, earth_distance, initial_bearing, Compass};
pub use error::RouteError;
pub use graph::Graph;
pub use policy::{Policy, DEFAULT_POLICY, MAX_WAYPOINTS};
pub use route::{
    compute_route, compute_route_default, reconstruct_path, total_distance_km,
    travel_time_minutes, ParseRouteTypeError, RouteResult, RouteType,
};
pub use synth::{synthesize_graph, waypoint_count};

/// A named position on Earth, as picked by a user or returned by a
/// [location search](places::LocationSearch).
///
/// Coordinates are never clamped; use [Coordinate::validate] to reject
/// out-of-range positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub category: Option<String>,
}

impl Coordinate {
    pub fn new<S: Into<String>>(lat: f64, lon: f64, name: S) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Checks that latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn validate(&self) -> Result<(), RouteError> {
        if (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon) {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Returns true if both coordinates describe the same position,
    /// regardless of their names.
    pub fn same_position(&self, other: &Self) -> bool {
        earth_distance(self.lat, self.lon, other.lat, other.lon) < POSITION_EPSILON_KM
    }
}

/// Positions closer than this (in kilometers) are considered the same point.
pub(crate) const POSITION_EPSILON_KM: f64 = 1e-9;

/// Identifies a [Node] within a single [Graph].
///
/// The ordering places the source first, then waypoints by their index,
/// and the destination last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    Source,
    Waypoint(usize),
    Destination,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Waypoint(k) => write!(f, "waypoint_{}", k),
            Self::Destination => write!(f, "destination"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Represents an element of the [Graph].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub category: Option<String>,
}

impl Node {
    pub fn from_coordinate(id: NodeId, c: &Coordinate) -> Self {
        Self {
            id,
            lat: c.lat,
            lon: c.lon,
            name: c.name.clone(),
            category: c.category.clone(),
        }
    }

    /// Great-circle distance to another node, in kilometers.
    pub fn distance_to(&self, other: &Node) -> f64 {
        earth_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Represents an outgoing (one-way) connection from a specific [Node].
///
/// `distance` is the great-circle distance between the two nodes in kilometers,
/// while `cost` is what the route search minimizes. Both must be finite
/// and not less than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub distance: f64,
    pub cost: f64,
}
