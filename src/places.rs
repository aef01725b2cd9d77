// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Turning user input into [Coordinates](Coordinate).

use log::debug;

use crate::Coordinate;

/// Resolves free-text queries into candidate [Coordinates](Coordinate),
/// best matches first.
///
/// Route planning never calls this itself - the caller picks one of the
/// candidates and passes it to [compute_route](crate::compute_route).
pub trait LocationSearch {
    fn search(&self, query: &str) -> Vec<Coordinate>;
}

/// Maximum number of candidates returned by [Gazetteer::search], unless overridden.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Offline [LocationSearch] over a fixed list of places.
///
/// Places whose name starts with the query are returned before places
/// which only contain it; matching is case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Gazetteer {
    places: Vec<Coordinate>,
    limit: usize,
}

impl Gazetteer {
    pub fn new(places: Vec<Coordinate>) -> Self {
        Self {
            places,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Gazetteer of major world cities.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CITIES
                .iter()
                .map(|&(name, lat, lon)| Coordinate::new(lat, lon, name).with_category("city"))
                .collect(),
        )
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl LocationSearch for Gazetteer {
    fn search(&self, query: &str) -> Vec<Coordinate> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::default();
        }

        let (mut prefixed, contained): (Vec<&Coordinate>, Vec<&Coordinate>) = self
            .places
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&query))
            .partition(|place| place.name.to_lowercase().starts_with(&query));
        prefixed.extend(contained);

        debug!("search {:?}: {} candidates", query, prefixed.len());
        prefixed.into_iter().take(self.limit).cloned().collect()
    }
}

/// Parses a `"lat,lon"` literal (as produced by clicking on a map) into a [Coordinate]
/// named after its position. Returns `None` if the input is not two comma-separated numbers.
///
/// The result is not validated - see [Coordinate::validate].
pub fn parse_point(s: &str) -> Option<Coordinate> {
    let (lat, lon) = s.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    Some(Coordinate::new(lat, lon, format!("{:.4}, {:.4}", lat, lon)))
}

/// Resolves user input, either a `"lat,lon"` literal or a place name.
/// Place names resolve to the best [LocationSearch] candidate.
pub fn resolve<S: LocationSearch + ?Sized>(search: &S, input: &str) -> Option<Coordinate> {
    parse_point(input).or_else(|| search.search(input).into_iter().next())
}

const BUILTIN_CITIES: &[(&str, f64, f64)] = &[
    ("Amsterdam", 52.3676, 4.9041),
    ("Athens", 37.9838, 23.7275),
    ("Bangkok", 13.7563, 100.5018),
    ("Beijing", 39.9042, 116.4074),
    ("Berlin", 52.5200, 13.4050),
    ("Buenos Aires", -34.6037, -58.3816),
    ("Cairo", 30.0444, 31.2357),
    ("Cape Town", -33.9249, 18.4241),
    ("Chicago", 41.8781, -87.6298),
    ("Delhi", 28.7041, 77.1025),
    ("Istanbul", 41.0082, 28.9784),
    ("Kraków", 50.0647, 19.9450),
    ("Lisbon", 38.7223, -9.1393),
    ("London", 51.5074, -0.1278),
    ("Los Angeles", 34.0522, -118.2437),
    ("Madrid", 40.4168, -3.7038),
    ("Mexico City", 19.4326, -99.1332),
    ("Moscow", 55.7558, 37.6173),
    ("Mumbai", 19.0760, 72.8777),
    ("Nairobi", -1.2921, 36.8219),
    ("New York", 40.7128, -74.0060),
    ("Paris", 48.8566, 2.3522),
    ("Prague", 50.0755, 14.4378),
    ("Rome", 41.9028, 12.4964),
    ("San Francisco", 37.7749, -122.4194),
    ("São Paulo", -23.5505, -46.6333),
    ("Seoul", 37.5665, 126.9780),
    ("Singapore", 1.3521, 103.8198),
    ("Stockholm", 59.3293, 18.0686),
    ("Sydney", -33.8688, 151.2093),
    ("Tokyo", 35.6762, 139.6503),
    ("Toronto", 43.6532, -79.3832),
    ("Vienna", 48.2082, 16.3738),
    ("Warsaw", 52.2297, 21.0122),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(places: &[Coordinate]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn builtin_places_are_valid() {
        let g = Gazetteer::builtin();
        assert!(!g.is_empty());
        assert_eq!(g.len(), BUILTIN_CITIES.len());
        for place in &g.places {
            assert!(place.validate().is_ok(), "{}", place.name);
            assert_eq!(place.category.as_deref(), Some("city"));
        }
    }

    #[test]
    fn prefix_matches_come_first() {
        let g = Gazetteer::new(vec![
            Coordinate::new(0.0, 0.0, "Old Paris"),
            Coordinate::new(0.0, 0.0, "Paris"),
            Coordinate::new(0.0, 0.0, "London"),
        ]);
        assert_eq!(names(&g.search("paris")), vec!["Paris", "Old Paris"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let g = Gazetteer::builtin();
        assert_eq!(names(&g.search("  new YORK ")), vec!["New York"]);
        assert_eq!(names(&g.search("kraków")), vec!["Kraków"]);
    }

    #[test]
    fn search_limit() {
        let g = Gazetteer::builtin().with_limit(2);
        assert_eq!(g.search("a").len(), 2);
        assert!(Gazetteer::builtin().search("a").len() <= DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn empty_and_unknown_queries() {
        let g = Gazetteer::builtin();
        assert!(g.search("").is_empty());
        assert!(g.search("   ").is_empty());
        assert!(g.search("Atlantis").is_empty());
    }

    #[test]
    fn parse_points() {
        let p = parse_point("52.2297, 21.0122").unwrap();
        assert_eq!((p.lat, p.lon), (52.2297, 21.0122));
        assert_eq!(p.name, "52.2297, 21.0122");

        // Not validated
        assert_eq!(parse_point("100,0").map(|p| p.lat), Some(100.0));

        assert!(parse_point("Warsaw").is_none());
        assert!(parse_point("52.2,").is_none());
        assert!(parse_point("a,b").is_none());
    }

    #[test]
    fn resolve_input() {
        let g = Gazetteer::builtin();
        assert_eq!(resolve(&g, "Lond").map(|c| c.name), Some("London".to_string()));
        assert_eq!(resolve(&g, "1.5,2.5").map(|c| c.lon), Some(2.5));
        assert!(resolve(&g, "Atlantis").is_none());
    }
}
