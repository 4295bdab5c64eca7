//! Therapist model representing a single directory entry.

use crate::domain::TherapistId;
use serde::{Deserialize, Serialize};

/// A therapist record in the directory.
///
/// All descriptive fields are free text; the roster this directory is built
/// from is hand-maintained, so `city` in particular may be noisy ("Tel-Aviv ",
/// "tel aviv") and is reconciled against the gazetteer at search time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Therapist {
    /// Unique identifier assigned by the store
    pub id: TherapistId,

    /// Geographic region label (free text, not used for distance filtering)
    pub region: String,

    /// Full name
    pub name: String,

    /// City as written in the source roster
    pub city: String,

    /// Profession or specialty
    pub profession: String,

    /// Free-text notes
    pub notes: String,

    /// Spoken languages
    pub languages: String,

    /// Contact phone number
    pub phone: String,

    /// Street address
    pub address: String,

    /// Gender as listed in the roster
    pub gender: String,
}

impl Therapist {
    /// Build a record from a draft with a store-assigned id.
    pub fn from_draft(id: TherapistId, draft: TherapistDraft) -> Self {
        Self {
            id,
            region: draft.region,
            name: draft.name,
            city: draft.city,
            profession: draft.profession,
            notes: draft.notes,
            languages: draft.languages,
            phone: draft.phone,
            address: draft.address,
            gender: draft.gender,
        }
    }
}

/// Payload for creating or replacing a therapist record.
///
/// Identical to [`Therapist`] minus the id, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TherapistDraft {
    pub region: String,
    pub name: String,
    pub city: String,
    pub profession: String,
    pub notes: String,
    pub languages: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
}

/// A therapist record annotated with its distance from a search origin.
///
/// Derived per search call and never persisted. The embedded record's `city`
/// holds the canonical gazetteer spelling, not the raw roster text, and
/// `distance_km` is rounded to two decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TherapistMatch {
    #[serde(flatten)]
    pub therapist: Therapist,

    /// Great-circle distance from the search origin, in kilometers
    pub distance_km: f64,
}
