use std::error::Error;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use routesynth::places::{self, Gazetteer};
use routesynth::{Coordinate, Policy, RouteResult, RouteType, DEFAULT_POLICY};

#[derive(Debug, thiserror::Error)]
#[error("unknown location: {0:?}")]
struct UnknownLocation(String);

#[derive(Parser)]
struct Cli {
    /// Start of the route: "lat,lon" or a place name
    from: String,

    /// End of the route: "lat,lon" or a place name
    to: String,

    /// What to minimize: "shortest" or "safest"
    #[arg(long, default_value = "shortest")]
    route_type: RouteType,

    /// Seed for waypoint jitter and safety penalties (random if not given)
    #[arg(long)]
    seed: Option<u64>,

    /// Desired distance between waypoints, in kilometers
    #[arg(long, default_value_t = DEFAULT_POLICY.spacing_km)]
    spacing_km: f64,

    /// Minimum number of waypoints
    #[arg(long, default_value_t = DEFAULT_POLICY.min_waypoints)]
    min_waypoints: usize,

    /// Maximum number of waypoints
    #[arg(long, default_value_t = DEFAULT_POLICY.max_waypoints)]
    max_waypoints: usize,

    /// Maximum waypoint displacement, in degrees
    #[arg(long, default_value_t = DEFAULT_POLICY.jitter_deg)]
    jitter_deg: f64,

    /// Average travel speed, in km/h
    #[arg(long, default_value_t = DEFAULT_POLICY.average_speed_kmh)]
    speed_kmh: f64,

    /// Print the route as GeoJSON instead of text directions
    #[arg(long)]
    geojson: bool,
}

impl Cli {
    fn policy(&self) -> Policy {
        Policy {
            spacing_km: self.spacing_km,
            min_waypoints: self.min_waypoints,
            max_waypoints: self.max_waypoints,
            jitter_deg: self.jitter_deg,
            average_speed_kmh: self.speed_kmh,
            ..DEFAULT_POLICY
        }
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let gazetteer = Gazetteer::builtin();
    let from = resolve(&gazetteer, &cli.from)?;
    let to = resolve(&gazetteer, &cli.to)?;

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let route = routesynth::compute_route(&from, &to, cli.route_type, &cli.policy(), &mut rng)?;

    if cli.geojson {
        println!("{}", serde_json::to_string_pretty(&to_geojson(&route))?);
    } else {
        print_directions(&route);
    }

    Ok(())
}

fn resolve(gazetteer: &Gazetteer, input: &str) -> Result<Coordinate, UnknownLocation> {
    places::resolve(gazetteer, input).ok_or_else(|| UnknownLocation(input.to_string()))
}

fn print_directions(route: &RouteResult) {
    if route.directions.is_empty() {
        println!("You are already there.");
        return;
    }

    for (i, direction) in route.directions.iter().enumerate() {
        println!("{:>3}. {} ({:.1} km)", i + 1, direction.instruction, direction.distance_km);
    }

    println!();
    println!(
        "{:.1} km, about {:.0} min ({})",
        route.total_distance_km, route.total_time_minutes, route.algorithm
    );
}

fn to_geojson(route: &RouteResult) -> serde_json::Value {
    let coordinates: Vec<[f64; 2]> = route.path.iter().map(|n| [n.lon, n.lat]).collect();

    serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "algorithm": route.algorithm,
                    "total_distance_km": route.total_distance_km,
                    "total_time_minutes": route.total_time_minutes,
                    "nodes": route.path,
                    "directions": route.directions,
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
            },
        ],
    })
}
