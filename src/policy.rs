// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::RouteError;

/// Describes how the waypoint graph between two points is synthesized,
/// and how travel time is estimated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    /// Desired distance between consecutive waypoints, in kilometers.
    /// The number of waypoints is `floor(span / spacing_km)`, clamped to
    /// `min_waypoints..=max_waypoints`. Must be positive.
    pub spacing_km: f64,

    /// Lower bound on the number of synthesized waypoints.
    pub min_waypoints: usize,

    /// Upper bound on the number of synthesized waypoints.
    /// Must not be less than `min_waypoints`, nor more than [MAX_WAYPOINTS].
    pub max_waypoints: usize,

    /// Maximum absolute offset (in degrees) added to the latitude and longitude
    /// of every waypoint. Offsets are drawn uniformly from `[-jitter_deg, jitter_deg]`.
    pub jitter_deg: f64,

    /// Inclusive range from which the safest-route multiplier of every edge is drawn.
    ///
    /// For example, with `(0.75, 1.25)`, a 100 km edge costs anywhere from 75 to 125
    /// when searching for the safest route. Bounds must be finite,
    /// non-negative and in order.
    pub safety_factor: (f64, f64),

    /// Assumed average travel speed, in kilometers per hour. Must be positive.
    pub average_speed_kmh: f64,
}

/// Largest allowed [Policy::max_waypoints]. Every pair of nodes is connected,
/// so the edge count grows quadratically with the number of waypoints.
pub const MAX_WAYPOINTS: usize = 16;

pub const DEFAULT_POLICY: Policy = Policy {
    spacing_km: 150.0,
    min_waypoints: 2,
    max_waypoints: 6,
    jitter_deg: 0.5,
    safety_factor: (0.75, 1.25),
    average_speed_kmh: 50.0,
};

impl Default for Policy {
    fn default() -> Self {
        DEFAULT_POLICY
    }
}

impl Policy {
    /// Checks all fields against their documented constraints.
    pub fn validate(&self) -> Result<(), RouteError> {
        if !(self.spacing_km.is_finite() && self.spacing_km > 0.0) {
            return Err(RouteError::InvalidPolicy(format!(
                "spacing_km must be positive, got {}",
                self.spacing_km
            )));
        }

        if self.min_waypoints > self.max_waypoints {
            return Err(RouteError::InvalidPolicy(format!(
                "min_waypoints ({}) exceeds max_waypoints ({})",
                self.min_waypoints, self.max_waypoints
            )));
        }

        if self.max_waypoints > MAX_WAYPOINTS {
            return Err(RouteError::InvalidPolicy(format!(
                "max_waypoints ({}) exceeds the limit of {}",
                self.max_waypoints, MAX_WAYPOINTS
            )));
        }

        if !(self.jitter_deg.is_finite() && self.jitter_deg >= 0.0) {
            return Err(RouteError::InvalidPolicy(format!(
                "jitter_deg must be non-negative, got {}",
                self.jitter_deg
            )));
        }

        let (low, high) = self.safety_factor;
        if !(low.is_finite() && high.is_finite() && low >= 0.0 && low <= high) {
            return Err(RouteError::InvalidPolicy(format!(
                "safety_factor must be an ordered non-negative range, got {}..={}",
                low, high
            )));
        }

        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(RouteError::InvalidPolicy(format!(
                "average_speed_kmh must be positive, got {}",
                self.average_speed_kmh
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Policy::default(), DEFAULT_POLICY);
        assert!(DEFAULT_POLICY.validate().is_ok());
    }

    #[test]
    fn rejects_bad_spacing() {
        for spacing_km in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let p = Policy {
                spacing_km,
                ..DEFAULT_POLICY
            };
            assert!(matches!(p.validate(), Err(RouteError::InvalidPolicy(_))));
        }
    }

    #[test]
    fn rejects_inverted_waypoint_bounds() {
        let p = Policy {
            min_waypoints: 5,
            max_waypoints: 3,
            ..DEFAULT_POLICY
        };
        assert!(matches!(p.validate(), Err(RouteError::InvalidPolicy(_))));
    }

    #[test]
    fn rejects_too_many_waypoints() {
        for (min_waypoints, max_waypoints) in [
            (2, MAX_WAYPOINTS + 1),
            (100_000, 100_000),
            (usize::MAX, usize::MAX),
        ] {
            let p = Policy {
                min_waypoints,
                max_waypoints,
                ..DEFAULT_POLICY
            };
            assert!(matches!(p.validate(), Err(RouteError::InvalidPolicy(_))));
        }

        let p = Policy {
            min_waypoints: MAX_WAYPOINTS,
            max_waypoints: MAX_WAYPOINTS,
            ..DEFAULT_POLICY
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_bad_safety_factor() {
        for safety_factor in [(1.25, 0.75), (-0.5, 1.0), (0.5, f64::NAN)] {
            let p = Policy {
                safety_factor,
                ..DEFAULT_POLICY
            };
            assert!(matches!(p.validate(), Err(RouteError::InvalidPolicy(_))));
        }
    }

    #[test]
    fn rejects_bad_speed_and_jitter() {
        let p = Policy {
            average_speed_kmh: 0.0,
            ..DEFAULT_POLICY
        };
        assert!(p.validate().is_err());

        let p = Policy {
            jitter_deg: -0.1,
            ..DEFAULT_POLICY
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn allows_fixed_values() {
        let p = Policy {
            min_waypoints: 3,
            max_waypoints: 3,
            jitter_deg: 0.0,
            safety_factor: (1.0, 1.0),
            ..DEFAULT_POLICY
        };
        assert!(p.validate().is_ok());
    }
}
