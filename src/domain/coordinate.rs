//! Coordinate value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A geographic coordinate in decimal degrees.
///
/// Latitude and longitude are range-checked at construction time, so a
/// `Coordinate` always holds a plottable point. The gazetteer file stores
/// coordinates as 2-element `[lat, lon]` arrays, and this type serializes
/// to the same shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a new coordinate, validating both components.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLatitude` or `InvalidLongitude`
    /// when a component is non-finite or out of range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

// Serde support - serialize as [lat, lon] to match the gazetteer file format
impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.lat, self.lon].serialize(serializer)
    }
}

// Serde support - deserialize from [lat, lon] with validation
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [lat, lon] = <[f64; 2]>::deserialize(deserializer)?;
        Coordinate::new(lat, lon).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
