//! Therapist service layer.
//!
//! Business logic for directory CRUD and proximity search.

use crate::domain::TherapistId;
use crate::error::{SearchError, SearchResult, StoreError, StoreResult};
use crate::models::{Therapist, TherapistDraft};
use crate::repositories::TherapistRepository;
use crate::search::{ProximitySearch, SearchResults};
use async_trait::async_trait;
use std::sync::Arc;

/// Therapist service trait for business operations.
#[async_trait]
pub trait TherapistService: Send + Sync {
    /// List the full directory snapshot.
    async fn list_therapists(&self) -> StoreResult<Vec<Therapist>>;

    /// Get a single record by id.
    async fn get_therapist(&self, id: u64) -> StoreResult<Therapist>;

    /// Create a record from a draft, assigning the next free id.
    async fn create_therapist(&self, draft: TherapistDraft) -> StoreResult<Therapist>;

    /// Replace an existing record.
    async fn update_therapist(&self, id: u64, draft: TherapistDraft) -> StoreResult<Therapist>;

    /// Delete a record.
    async fn delete_therapist(&self, id: u64) -> StoreResult<()>;

    /// Find therapists near a city, sorted by ascending distance.
    ///
    /// A `"_"` query skips the geo filter and returns the whole snapshot.
    async fn search_by_city(
        &self,
        city_query: &str,
        max_distance_km: u32,
    ) -> SearchResult<SearchResults>;
}

/// Default implementation of TherapistService.
pub struct TherapistServiceImpl {
    repository: Arc<dyn TherapistRepository>,
    search: ProximitySearch,
}

/// Validation helper functions.
impl TherapistServiceImpl {
    /// Validate presence of the fields the directory cannot function without.
    fn validate_draft(draft: &TherapistDraft) -> Result<(), String> {
        if draft.name.trim().is_empty() {
            return Err("Therapist name cannot be empty".to_string());
        }
        if draft.city.trim().is_empty() {
            return Err("Therapist city cannot be empty".to_string());
        }
        Ok(())
    }

    fn parse_id(id: u64) -> StoreResult<TherapistId> {
        TherapistId::new(id).map_err(|_| StoreError::NotFound(id))
    }
}

impl TherapistServiceImpl {
    /// Create a new therapist service.
    pub fn new(repository: Arc<dyn TherapistRepository>, search: ProximitySearch) -> Self {
        Self { repository, search }
    }
}

#[async_trait]
impl TherapistService for TherapistServiceImpl {
    async fn list_therapists(&self) -> StoreResult<Vec<Therapist>> {
        self.repository.load_all().await
    }

    async fn get_therapist(&self, id: u64) -> StoreResult<Therapist> {
        self.repository.get(Self::parse_id(id)?).await
    }

    async fn create_therapist(&self, draft: TherapistDraft) -> StoreResult<Therapist> {
        Self::validate_draft(&draft).map_err(StoreError::InvalidRecord)?;
        self.repository.create(draft).await
    }

    async fn update_therapist(&self, id: u64, draft: TherapistDraft) -> StoreResult<Therapist> {
        Self::validate_draft(&draft).map_err(StoreError::InvalidRecord)?;
        self.repository.update(Self::parse_id(id)?, draft).await
    }

    async fn delete_therapist(&self, id: u64) -> StoreResult<()> {
        self.repository.delete(Self::parse_id(id)?).await
    }

    async fn search_by_city(
        &self,
        city_query: &str,
        max_distance_km: u32,
    ) -> SearchResult<SearchResults> {
        if city_query.trim().is_empty() {
            return Err(SearchError::CityNotFound(city_query.to_string()));
        }

        // Fresh snapshot per call; searches never see a cached record list.
        let records = self.repository.load_all().await?;
        self.search.search(city_query, max_distance_km, records)
    }
}
