// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use log::{debug, trace};
use rand::Rng;

use crate::{earth_distance, Coordinate, Graph, Node, NodeId, Policy, RouteError, RouteType};

/// Returns the number of waypoints to synthesize between two points `span_km` apart:
/// `floor(span_km / spacing_km)`, clamped to the policy's bounds.
pub fn waypoint_count(span_km: f64, policy: &Policy) -> usize {
    let desired = (span_km / policy.spacing_km).floor();
    // NaN and negative values saturate to zero
    (desired as usize).clamp(policy.min_waypoints, policy.max_waypoints)
}

/// Builds a [Graph] resembling a road network between `source` and `destination`.
///
/// The graph consists of the two endpoints (with ids [NodeId::Source] and
/// [NodeId::Destination], positioned exactly at the provided coordinates) and
/// [waypoint_count] waypoints. The waypoints are evenly interpolated between the endpoints
/// (in plain lat-lon space, not along the great circle, but going the shorter way around
/// the antimeridian), and then displaced by a random jitter to emulate a winding road.
///
/// Every pair of nodes is connected in both directions. The cost of an edge is
/// its great-circle distance for [RouteType::Shortest], or the distance multiplied by
/// a random factor from [Policy::safety_factor] for [RouteType::Safest]. Safest graphs
/// are thus only reproducible with a seeded `rng`.
///
/// The policy is [validated](Policy::validate) first. Coordinates are expected to be valid;
/// coincident endpoints result in [RouteError::DegenerateSegment], and positions which
/// produce a non-finite distance result in [RouteError::InvalidEdge].
pub fn synthesize_graph<R: Rng + ?Sized>(
    source: &Coordinate,
    destination: &Coordinate,
    route_type: RouteType,
    policy: &Policy,
    rng: &mut R,
) -> Result<Graph, RouteError> {
    policy.validate()?;

    if source.same_position(destination) {
        return Err(RouteError::DegenerateSegment);
    }

    let span = earth_distance(source.lat, source.lon, destination.lat, destination.lon);
    let n = waypoint_count(span, policy);

    let mut nodes = Vec::with_capacity(n + 2);
    nodes.push(Node::from_coordinate(NodeId::Source, source));
    for i in 1..=n {
        nodes.push(synthesize_waypoint(source, destination, i, n, policy, rng));
    }
    nodes.push(Node::from_coordinate(NodeId::Destination, destination));

    let mut g = Graph::new();
    for node in &nodes {
        g.set_node(node.clone());
    }

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let distance = a.distance_to(b);
            let cost = match route_type {
                RouteType::Shortest => distance,
                RouteType::Safest => {
                    let (low, high) = policy.safety_factor;
                    distance * rng.random_range(low..=high)
                }
            };

            trace!("edge {} <-> {}: {:.3} km, cost {:.3}", a.id, b.id, distance, cost);
            if !g.connect(a.id, b.id, cost) {
                return Err(RouteError::InvalidEdge {
                    from: a.id,
                    to: b.id,
                });
            }
        }
    }

    debug!(
        "synthesized {} graph: {:.1} km span, {} waypoints, {} edges",
        route_type,
        span,
        n,
        g.edge_count()
    );

    Ok(g)
}

fn synthesize_waypoint<R: Rng + ?Sized>(
    source: &Coordinate,
    destination: &Coordinate,
    i: usize,
    n: usize,
    policy: &Policy,
    rng: &mut R,
) -> Node {
    let ratio = i as f64 / (n + 1) as f64;
    let jitter = policy.jitter_deg;

    let lat = source.lat + (destination.lat - source.lat) * ratio + rng.random_range(-jitter..=jitter);
    let lon = source.lon + longitude_delta(source.lon, destination.lon) * ratio
        + rng.random_range(-jitter..=jitter);

    Node {
        id: NodeId::Waypoint(i),
        lat: lat.clamp(-90.0, 90.0),
        lon: wrap_longitude(lon),
        name: format!("Waypoint {}", i),
        category: None,
    }
}

/// Returns the eastward change of longitude (in degrees, within [-180, 180])
/// needed to get from `from` to `to` the shorter way.
fn longitude_delta(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Brings a longitude into the [-180, 180] range.
fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}
