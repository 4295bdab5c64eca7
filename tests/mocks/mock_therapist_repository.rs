use async_trait::async_trait;
use nefesh_mcp_server::domain::TherapistId;
use nefesh_mcp_server::error::{StoreError, StoreResult};
use nefesh_mcp_server::models::{Therapist, TherapistDraft};
use nefesh_mcp_server::repositories::TherapistRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock therapist repository for testing.
///
/// Provides an in-memory implementation of TherapistRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockTherapistRepository {
    records: Arc<Mutex<Vec<Therapist>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockTherapistRepository {
    /// Create a new empty MockTherapistRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository pre-seeded with records.
    pub fn with_records(records: Vec<Therapist>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = records;
        repo
    }

    /// Add a record to the mock repository.
    pub fn add_record(&self, record: Therapist) {
        self.records.lock().unwrap().push(record);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Clear all records from the repository.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockTherapistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TherapistRepository for MockTherapistRepository {
    async fn load_all(&self) -> StoreResult<Vec<Therapist>> {
        self.track_call("load_all");
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get(&self, id: TherapistId) -> StoreResult<Therapist> {
        self.track_call("get");
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id.get()))
    }

    async fn create(&self, draft: TherapistDraft) -> StoreResult<Therapist> {
        self.track_call("create");
        let mut records = self.records.lock().unwrap();
        let next_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
        let record = Therapist::from_draft(
            TherapistId::new(next_id).expect("ids start at 1"),
            draft,
        );
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: TherapistId, draft: TherapistDraft) -> StoreResult<Therapist> {
        self.track_call("update");
        let mut records = self.records.lock().unwrap();
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id.get()))?;
        let record = Therapist::from_draft(id, draft);
        records[index] = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: TherapistId) -> StoreResult<()> {
        self.track_call("delete");
        let mut records = self.records.lock().unwrap();
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id.get()))?;
        records.remove(index);
        Ok(())
    }
}
