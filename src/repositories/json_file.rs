//! Flat-JSON-file therapist repository.
//!
//! The whole directory lives in one JSON document: an array of record
//! objects. Every operation reads the current file, mutates the list in
//! memory, and writes the full list back. A missing file reads as an empty
//! directory and is created on first write.

use crate::domain::TherapistId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Therapist, TherapistDraft};
use crate::repositories::traits::TherapistRepository;
use async_trait::async_trait;
use std::path::PathBuf;

/// Therapist repository backed by a single JSON file.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the full record list.
    ///
    /// Individual malformed rows are skipped with a warning so one bad
    /// record cannot take every search down. A missing file is an empty
    /// directory, not an error.
    async fn read_records(&self) -> StoreResult<Vec<Therapist>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "data file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let rows: Vec<serde_json::Value> = serde_json::from_str(&raw)?;

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<Therapist>(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed record row");
                }
            }
        }
        Ok(records)
    }

    /// Serialize and write the full record list back to the file.
    async fn write_records(&self, records: &[Therapist]) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    fn next_id(records: &[Therapist]) -> u64 {
        records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl TherapistRepository for JsonFileRepository {
    async fn load_all(&self) -> StoreResult<Vec<Therapist>> {
        self.read_records().await
    }

    async fn get(&self, id: TherapistId) -> StoreResult<Therapist> {
        let records = self.read_records().await?;
        records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id.get()))
    }

    async fn create(&self, draft: TherapistDraft) -> StoreResult<Therapist> {
        let mut records = self.read_records().await?;

        let id = TherapistId::new(Self::next_id(&records))
            .map_err(|e| StoreError::Other(e.to_string()))?;
        let record = Therapist::from_draft(id, draft);

        records.push(record.clone());
        self.write_records(&records).await?;
        Ok(record)
    }

    async fn update(&self, id: TherapistId, draft: TherapistDraft) -> StoreResult<Therapist> {
        let mut records = self.read_records().await?;

        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id.get()))?;

        let record = Therapist::from_draft(id, draft);
        records[index] = record.clone();
        self.write_records(&records).await?;
        Ok(record)
    }

    async fn delete(&self, id: TherapistId) -> StoreResult<()> {
        let mut records = self.read_records().await?;

        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id.get()))?;

        records.remove(index);
        self.write_records(&records).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, city: &str) -> TherapistDraft {
        TherapistDraft {
            name: name.to_string(),
            city: city.to_string(),
            ..Default::default()
        }
    }

    fn repo_in(dir: &tempfile::TempDir) -> JsonFileRepository {
        JsonFileRepository::new(dir.path().join("data.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        let first = repo.create(draft("A", "Haifa")).await.unwrap();
        let second = repo.create(draft("B", "Tel Aviv")).await.unwrap();
        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
    }

    #[tokio::test]
    async fn test_id_assignment_follows_max_not_len() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        let a = repo.create(draft("A", "Haifa")).await.unwrap();
        let b = repo.create(draft("B", "Haifa")).await.unwrap();
        repo.delete(a.id).await.unwrap();

        let c = repo.create(draft("C", "Haifa")).await.unwrap();
        assert_eq!(b.id.get(), 2);
        assert_eq!(c.id.get(), 3);
    }

    #[tokio::test]
    async fn test_get_and_update_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        let created = repo.create(draft("A", "Haifa")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let updated = repo.update(created.id, draft("A", "Tel Aviv")).await.unwrap();
        assert_eq!(updated.city, "Tel Aviv");
        assert_eq!(repo.get(created.id).await.unwrap().city, "Tel Aviv");
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        let err = repo
            .update(TherapistId::new(9).unwrap(), draft("A", "Haifa"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        let created = repo.create(draft("A", "Haifa")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        let err = repo.get(created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_row_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "region": "", "name": "A", "city": "Haifa", "profession": "",
                 "notes": "", "languages": "", "phone": "", "address": "", "gender": ""},
                {"id": "not-a-number", "name": "broken"}
            ]"#,
        )
        .unwrap();

        let repo = JsonFileRepository::new(path);
        let records = repo.load_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
    }

    #[tokio::test]
    async fn test_unparseable_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json at all").unwrap();

        let repo = JsonFileRepository::new(path);
        assert!(matches!(
            repo.load_all().await.unwrap_err(),
            StoreError::Json(_)
        ));
    }
}
