//! TherapistId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for therapist ids.
///
/// Ids are positive integers assigned by the store; zero is never a valid
/// id, so it is rejected at construction time.
///
/// # Example
///
/// ```
/// use nefesh_mcp_server::domain::TherapistId;
///
/// let id = TherapistId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TherapistId(u64);

impl TherapistId {
    /// Create a new TherapistId, validating that it is at least 1.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroId` if the provided id is zero.
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::ZeroId);
        }
        Ok(Self(id))
    }

    /// Get the underlying integer value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

// Serde support - serialize as a plain integer
impl Serialize for TherapistId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from an integer with validation
impl<'de> Deserialize<'de> for TherapistId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        TherapistId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TherapistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
