//! Data models for the Nefesh therapist directory.

pub mod therapist;

pub use therapist::{Therapist, TherapistDraft, TherapistMatch};
