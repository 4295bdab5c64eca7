//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided id is zero (ids start at 1).
    ZeroId,

    /// The provided latitude is outside [-90, 90] or not finite.
    InvalidLatitude(f64),

    /// The provided longitude is outside [-180, 180] or not finite.
    InvalidLongitude(f64),

    /// A required free-text field is blank.
    BlankField(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroId => write!(f, "Therapist id must be at least 1"),
            Self::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
            Self::InvalidLongitude(lon) => write!(f, "Invalid longitude: {}", lon),
            Self::BlankField(field) => write!(f, "Field cannot be blank: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
