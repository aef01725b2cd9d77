// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::NodeId;

/// Error conditions which may occur when planning a route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Latitude is outside of [-90, 90] or longitude outside of [-180, 180].
    /// Coordinates are never clamped.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Start and end share the same position, so there is no segment
    /// to build a graph along (and no bearing to follow).
    #[error("start and end positions are the same")]
    DegenerateSegment,

    /// The search did not reach the destination.
    #[error("no route to the destination")]
    UnreachableDestination,

    /// The start or end nodes don't exist in a graph.
    #[error("invalid node: {0}")]
    InvalidReference(NodeId),

    /// An edge between two synthesized nodes was rejected by the [Graph](crate::Graph),
    /// because its distance or cost is negative or not finite.
    #[error("invalid edge: {from} -> {to}")]
    InvalidEdge { from: NodeId, to: NodeId },

    /// A [Policy](crate::Policy) value is out of its allowed range.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}
