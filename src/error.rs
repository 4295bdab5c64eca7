//! Error types for the Nefesh directory server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when reading or writing the therapist store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file does not contain a valid JSON record list
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No record exists with the given id
    #[error("Therapist not found: {0}")]
    NotFound(u64),

    /// A record failed presence validation
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur while loading the city gazetteer.
///
/// All of these are fatal at startup: a server without a usable gazetteer
/// cannot answer proximity searches.
#[derive(Error, Debug)]
pub enum GazetteerError {
    /// Gazetteer file could not be read
    #[error("Gazetteer I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Gazetteer file is not a valid JSON city table
    #[error("Gazetteer parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A city entry carries an unusable coordinate
    #[error("Invalid coordinate for city {city}: {reason}")]
    InvalidCoordinate { city: String, reason: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur during fuzzy city matching.
#[derive(Error, Debug)]
pub enum MatchingError {
    /// No known city resembles the query above the confidence floor
    #[error("No city matches the query with sufficient confidence: {query}")]
    NoConfidentMatch { query: String },

    /// There are no candidate cities to match against
    #[error("No candidate cities to match against")]
    NoCandidates,
}

/// Errors that can occur while importing CSV source data.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Input file could not be read
    #[error("Import I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A city row carries an unusable coordinate
    #[error("Invalid coordinate on line {line}: {reason}")]
    BadCoordinate { line: u64, reason: String },
}

/// Errors that can occur during a proximity search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query city could not be resolved against the gazetteer
    #[error("No matching city found: {0}")]
    CityNotFound(String),

    /// The city resolved but no record cleared the acceptance bar in range
    #[error("No matching therapists found")]
    NoResults,

    /// The record snapshot could not be loaded
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MatchingError
pub type MatchingResult<T> = Result<T, MatchingError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;
