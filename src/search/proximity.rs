//! The search orchestrator: resolve a city query, build the radius set,
//! reconcile record cities, sort by distance.

use crate::error::{SearchError, SearchResult};
use crate::geo::Gazetteer;
use crate::matching::{CityResolver, RecordCityMatcher};
use crate::models::{Therapist, TherapistMatch};
use std::sync::Arc;

/// Sentinel city query meaning "no geo filter".
pub const WILDCARD_CITY: &str = "_";

/// Outcome of a proximity search.
///
/// A wildcard query returns the raw snapshot; a resolved city query
/// returns distance-annotated matches plus the canonical origin name. The
/// split keeps "no geo filter" visible in the type instead of encoding it
/// as a zero distance.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Wildcard query: every record, unannotated.
    All(Vec<Therapist>),

    /// Geo-filtered query: matches sorted ascending by distance.
    Near {
        /// Canonical gazetteer spelling of the resolved origin city
        origin_city: String,
        matches: Vec<TherapistMatch>,
    },
}

/// Composes the resolver, radius filter, and record matcher into the
/// "therapists near city X within Y km" operation.
#[derive(Debug, Clone)]
pub struct ProximitySearch {
    gazetteer: Arc<Gazetteer>,
    resolver: CityResolver,
    matcher: RecordCityMatcher,
}

impl ProximitySearch {
    /// Create a search pipeline over the given gazetteer.
    ///
    /// `confidence_floor` gates query resolution; `accept_threshold` gates
    /// per-record city reconciliation.
    pub fn new(gazetteer: Arc<Gazetteer>, confidence_floor: u8, accept_threshold: u8) -> Self {
        Self {
            gazetteer,
            resolver: CityResolver::new(confidence_floor),
            matcher: RecordCityMatcher::new(accept_threshold),
        }
    }

    /// Search the record snapshot for therapists near a city.
    ///
    /// # Errors
    ///
    /// - [`SearchError::CityNotFound`] when the query resembles no known
    ///   city above the confidence floor.
    /// - [`SearchError::NoResults`] when the city resolves but no record
    ///   clears the acceptance bar within range.
    pub fn search(
        &self,
        city_query: &str,
        max_distance_km: u32,
        records: Vec<Therapist>,
    ) -> SearchResult<SearchResults> {
        if city_query == WILDCARD_CITY {
            tracing::debug!(records = records.len(), "wildcard query, skipping geo filter");
            return Ok(SearchResults::All(records));
        }

        let resolved = self
            .resolver
            .resolve(city_query, self.gazetteer.city_names())
            .map_err(|e| {
                tracing::info!(city_query, error = %e, "city query did not resolve");
                SearchError::CityNotFound(city_query.to_string())
            })?;

        // The resolver only returns names taken from the gazetteer.
        let origin = self
            .gazetteer
            .coordinate_of(&resolved.city)
            .ok_or_else(|| SearchError::CityNotFound(city_query.to_string()))?;

        let radius_set = self
            .gazetteer
            .cities_within(origin, f64::from(max_distance_km));
        tracing::debug!(
            origin_city = %resolved.city,
            confidence = resolved.confidence,
            max_distance_km,
            cities_in_range = radius_set.len(),
            "radius set built"
        );

        let mut matches = self.matcher.annotate(records, &radius_set);
        if matches.is_empty() {
            return Err(SearchError::NoResults);
        }

        // Stable: records at the same distance keep their snapshot order.
        matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(SearchResults::Near {
            origin_city: resolved.city,
            matches,
        })
    }
}
