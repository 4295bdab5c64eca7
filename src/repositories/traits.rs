use crate::domain::TherapistId;
use crate::error::StoreResult;
use crate::models::{Therapist, TherapistDraft};
use async_trait::async_trait;

/// Repository for managing therapist records.
///
/// Provides abstraction over record storage and retrieval, enabling
/// different implementations (flat file, mock).
#[async_trait]
pub trait TherapistRepository: Send + Sync {
    /// Retrieve the current full snapshot of records.
    async fn load_all(&self) -> StoreResult<Vec<Therapist>>;

    /// Retrieve a single record by id.
    async fn get(&self, id: TherapistId) -> StoreResult<Therapist>;

    /// Create a new record, assigning the next free id.
    async fn create(&self, draft: TherapistDraft) -> StoreResult<Therapist>;

    /// Replace an existing record.
    async fn update(&self, id: TherapistId, draft: TherapistDraft) -> StoreResult<Therapist>;

    /// Delete a record.
    async fn delete(&self, id: TherapistId) -> StoreResult<()>;
}
