//! The city gazetteer: the authoritative table of known cities and their
//! coordinates.

use crate::domain::Coordinate;
use crate::error::GazetteerError;
use crate::geo::distance::haversine_km;
use std::collections::HashMap;
use std::path::Path;

/// Cities within some radius of an origin, each mapped to its distance in
/// kilometers. Derived per search call, unordered.
pub type RadiusSet = HashMap<String, f64>;

/// Immutable city-name -> coordinate table.
///
/// Loaded whole into memory at process start and shared read-only for the
/// process lifetime. The backing file is a JSON object mapping each city
/// name to a `[lat, lon]` pair.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    cities: HashMap<String, Coordinate>,
}

impl Gazetteer {
    /// Build a gazetteer from an in-memory table.
    pub fn new(cities: HashMap<String, Coordinate>) -> Self {
        Self { cities }
    }

    /// Load the gazetteer from a JSON file.
    ///
    /// Any unreadable file, malformed JSON, or out-of-range coordinate is
    /// an error; a server without a trustworthy gazetteer must not start.
    pub fn load(path: &Path) -> Result<Self, GazetteerError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a gazetteer from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, GazetteerError> {
        let table: HashMap<String, [f64; 2]> = serde_json::from_str(raw)?;

        let mut cities = HashMap::with_capacity(table.len());
        for (name, [lat, lon]) in table {
            let coordinate = Coordinate::new(lat, lon).map_err(|e| {
                GazetteerError::InvalidCoordinate {
                    city: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            cities.insert(name, coordinate);
        }
        Ok(Self::new(cities))
    }

    /// Coordinate of a city by its canonical name.
    pub fn coordinate_of(&self, city: &str) -> Option<&Coordinate> {
        self.cities.get(city)
    }

    /// Iterator over all known city names.
    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Number of known cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the gazetteer holds no cities at all.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// All cities within `radius_km` of `origin`, with their distances.
    ///
    /// The boundary is inclusive: a city exactly `radius_km` away is
    /// included. A zero radius keeps only cities at the origin coordinate.
    pub fn cities_within(&self, origin: &Coordinate, radius_km: f64) -> RadiusSet {
        let mut within = RadiusSet::new();
        for (name, coordinate) in &self.cities {
            let distance_km = haversine_km(coordinate, origin);
            if distance_km <= radius_km {
                within.insert(name.clone(), distance_km);
            }
        }
        within
    }
}
