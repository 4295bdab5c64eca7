//! Nefesh MCP Server - a Rust implementation of the Model Context Protocol
//! server for the Nefesh therapist directory.
//!
//! This library provides a record-management service for a directory of
//! mental-health therapists: CRUD over records persisted as a flat JSON
//! document, plus a proximity search that finds therapists within a travel
//! radius of a named city using fuzzy city-name matching and great-circle
//! distance.
//!
//! # Architecture
//!
//! - **models**: Data structures for therapist records and search matches
//! - **domain**: Validated value objects (ids, coordinates)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **geo**: City gazetteer and haversine distance
//! - **matching**: Token-sort fuzzy matching for city names
//! - **search**: The proximity-search orchestrator
//! - **repositories**: Record storage behind a trait (JSON file store)
//! - **services**: Business logic between handlers and storage
//! - **import**: CSV-to-JSON conversion for the source data
//! - **server**: MCP protocol server

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod geo;
pub mod import;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, GazetteerError, ImportError, MatchingError, SearchError, StoreError};
pub use geo::{Gazetteer, RadiusSet};
pub use matching::{CityMatch, CityResolver, RecordCityMatcher};
pub use models::{Therapist, TherapistDraft, TherapistMatch};
pub use repositories::{JsonFileRepository, TherapistRepository};
pub use search::{ProximitySearch, SearchResults, WILDCARD_CITY};
pub use server::NefeshMcpServer;
pub use services::{TherapistService, TherapistServiceImpl};
