//! Proximity search over the therapist directory.

pub mod proximity;

pub use proximity::{ProximitySearch, SearchResults, WILDCARD_CITY};
