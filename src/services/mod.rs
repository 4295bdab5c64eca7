//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the repository and the search pipeline. They provide a clean boundary
//! between the MCP handlers and the data access layer.

mod therapist_service;

pub use therapist_service::{TherapistService, TherapistServiceImpl};

// Re-export common types used by services
pub use crate::models::{Therapist, TherapistDraft, TherapistMatch};
pub use crate::search::{ProximitySearch, SearchResults};
