//! Reconciliation of noisy record cities against a radius set.

use crate::geo::RadiusSet;
use crate::matching::token_sort::{ratio, sort_tokens};
use crate::models::{Therapist, TherapistMatch};

/// Matches each therapist record's raw city text against the cities of a
/// radius set and annotates accepted records with their distance.
///
/// Acceptance requires the best score to be strictly greater than the
/// threshold. Records that do not clear the bar are dropped: with a
/// hand-maintained roster a false negative is preferable to attaching a
/// therapist to the wrong city.
#[derive(Debug, Clone)]
pub struct RecordCityMatcher {
    accept_threshold: u8,
}

impl RecordCityMatcher {
    /// Create a matcher with the given acceptance threshold (0-100).
    pub fn new(accept_threshold: u8) -> Self {
        Self { accept_threshold }
    }

    /// Annotate records whose city confidently matches a radius-set city.
    ///
    /// Accepted records get their `city` overwritten with the canonical
    /// gazetteer spelling and a `distance_km` rounded to two decimals.
    /// Input order is preserved for the records that survive.
    pub fn annotate(&self, records: Vec<Therapist>, radius_set: &RadiusSet) -> Vec<TherapistMatch> {
        // Normalize each radius-set city once instead of per record.
        let candidates: Vec<(&str, f64, String)> = radius_set
            .iter()
            .map(|(city, distance_km)| (city.as_str(), *distance_km, sort_tokens(city)))
            .collect();

        let mut matches = Vec::new();
        for mut record in records {
            let record_sorted = sort_tokens(&record.city);

            let mut best: Option<(&str, f64, u8)> = None;
            for (city, distance_km, city_sorted) in &candidates {
                let score = ratio(&record_sorted, city_sorted);
                if best.map_or(true, |(_, _, best_score)| score > best_score) {
                    best = Some((*city, *distance_km, score));
                }
            }

            match best {
                Some((city, distance_km, score)) if score > self.accept_threshold => {
                    record.city = city.to_string();
                    matches.push(TherapistMatch {
                        therapist: record,
                        distance_km: round_to_two_decimals(distance_km),
                    });
                }
                Some((city, _, score)) => {
                    tracing::debug!(
                        record_id = record.id.get(),
                        record_city = %record.city,
                        best_candidate = city,
                        score,
                        threshold = self.accept_threshold,
                        "record city below acceptance threshold, dropped"
                    );
                }
                None => {}
            }
        }
        matches
    }
}

fn round_to_two_decimals(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
