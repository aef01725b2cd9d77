use rand::rngs::SmallRng;
use rand::SeedableRng;
use routesynth::places::{Gazetteer, LocationSearch};
use routesynth::{
    compute_route, earth_distance, search, synthesize_graph, Coordinate, Maneuver, NodeId,
    RouteType, DEFAULT_POLICY,
};

macro_rules! assert_almost_eq {
    ($a:expr, $b:expr) => {
        assert!(
            (($a - $b).abs() < 1e-6),
            "assertion failed: {} ≈ {}",
            $a,
            $b
        )
    };
}

fn city(name: &str) -> Coordinate {
    Gazetteer::builtin()
        .search(name)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("{} not in the gazetteer", name))
}

const PAIRS: &[(&str, &str)] = &[
    ("New York", "London"),
    ("Warsaw", "Berlin"),
    ("Sydney", "Tokyo"),
    ("Cape Town", "Cairo"),
    ("Paris", "Vienna"),
    ("Los Angeles", "San Francisco"),
];

#[test]
fn solver_never_exceeds_the_chain() {
    for (seed, &(a, b)) in PAIRS.iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(seed as u64);
        let g = synthesize_graph(&city(a), &city(b), RouteType::Shortest, &DEFAULT_POLICY, &mut rng)
            .unwrap();

        let chain: Vec<_> = g.iter().collect();
        let chain_distance: f64 = chain.windows(2).map(|w| w[0].distance_to(w[1])).sum();

        let tree = search(&g, NodeId::Source, NodeId::Destination).unwrap();
        assert!(
            tree.distance_to(NodeId::Destination) <= chain_distance + 1e-9,
            "{} -> {}",
            a,
            b
        );
    }
}

#[test]
fn routes_are_consistent() {
    for route_type in [RouteType::Shortest, RouteType::Safest] {
        for (seed, &(a, b)) in PAIRS.iter().enumerate() {
            let (source, destination) = (city(a), city(b));
            let mut rng = SmallRng::seed_from_u64(seed as u64);
            let route =
                compute_route(&source, &destination, route_type, &DEFAULT_POLICY, &mut rng)
                    .unwrap();

            // Endpoints are exactly the requested coordinates
            let first = &route.path[0];
            let last = route.path.last().unwrap();
            assert_eq!((first.lat, first.lon, &first.name), (source.lat, source.lon, &source.name));
            assert_eq!(
                (last.lat, last.lon, &last.name),
                (destination.lat, destination.lon, &destination.name)
            );

            // Distance additivity
            let sum: f64 = route.path.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
            assert_almost_eq!(route.total_distance_km, sum);
            assert_almost_eq!(
                route.total_time_minutes,
                route.total_distance_km * 60.0 / DEFAULT_POLICY.average_speed_kmh
            );

            // Directions
            assert_eq!(route.directions.len(), route.path.len() - 1);
            assert_eq!(route.directions[0].maneuver, Maneuver::Start);
            let leg_sum: f64 = route.directions.iter().map(|d| d.distance_km).sum();
            assert!((leg_sum - route.total_distance_km).abs() <= 0.05 * route.directions.len() as f64);

            // Never shorter than the direct line
            let direct = earth_distance(source.lat, source.lon, destination.lat, destination.lon);
            assert!(route.total_distance_km >= direct - 1e-9);
        }
    }
}

#[test]
fn shortest_route_is_direct() {
    // Great-circle distances obey the triangle inequality,
    // so no detour over waypoints can be shorter than the direct edge.
    let mut rng = SmallRng::seed_from_u64(7);
    let route = compute_route(
        &city("New York"),
        &city("London"),
        RouteType::Shortest,
        &DEFAULT_POLICY,
        &mut rng,
    )
    .unwrap();
    assert_eq!(route.path.len(), 2);
    assert!((route.total_distance_km - 5570.0).abs() < 5570.0 * 0.05);
}

#[test]
fn safest_route_may_detour() {
    let mut detoured = false;
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let route = compute_route(
            &city("Warsaw"),
            &city("Berlin"),
            RouteType::Safest,
            &DEFAULT_POLICY,
            &mut rng,
        )
        .unwrap();
        assert!(route.path.len() <= DEFAULT_POLICY.max_waypoints + 2);
        if route.path.len() > 2 {
            detoured = true;
            assert!(route
                .directions
                .last()
                .is_some_and(|d| d.maneuver == Maneuver::Arrive));
        }
    }
    assert!(detoured);
}
