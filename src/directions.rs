// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{compass_direction, Compass, Node};

/// Kind of a [Direction] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Maneuver {
    Start,
    Continue,
    Arrive,
}

/// A single turn-by-turn instruction, covering one leg of a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Direction {
    pub maneuver: Maneuver,
    pub instruction: String,

    /// Length of the leg, in kilometers, rounded to one decimal place.
    pub distance_km: f64,

    /// Heading of the leg. `None` for zero-length legs.
    pub compass: Option<Compass>,
}

/// Turns a path into one [Direction] per leg (pair of consecutive nodes).
///
/// The first leg is a [Maneuver::Start] from the first node, the last leg
/// (if there is more than one) is a [Maneuver::Arrive] at the last node,
/// and all others are [Maneuver::Continue]. A single-leg path gets one
/// Start which also announces the arrival. Paths with fewer than 2 nodes
/// result in no directions.
pub fn generate_directions(path: &[Node]) -> Vec<Direction> {
    let legs = path.len().saturating_sub(1);

    path.windows(2)
        .enumerate()
        .map(|(i, leg)| {
            let (from, to) = (&leg[0], &leg[1]);
            let compass = compass_direction(from, to);
            let heading = compass
                .map(|c| format!(" {}", c.label().to_lowercase()))
                .unwrap_or_default();

            let (maneuver, instruction) = if legs == 1 {
                (
                    Maneuver::Start,
                    format!("Start at {} and head{} to arrive at {}", from.name, heading, to.name),
                )
            } else if i == 0 {
                (
                    Maneuver::Start,
                    format!("Start at {} and head{} toward {}", from.name, heading, to.name),
                )
            } else if i + 1 == legs {
                (Maneuver::Arrive, format!("Arrive at {}", to.name))
            } else {
                (
                    Maneuver::Continue,
                    format!("Continue{} toward {}", heading, to.name),
                )
            };

            Direction {
                maneuver,
                instruction,
                distance_km: round_to_tenth(from.distance_to(to)),
                compass,
            }
        })
        .collect()
}

fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
