//! Fuzzy resolution of free-text city queries against the gazetteer.

use crate::error::{MatchingError, MatchingResult};
use crate::matching::token_sort::{ratio, sort_tokens};

/// A resolved city name with its similarity confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityMatch {
    /// The gazetteer's canonical spelling
    pub city: String,

    /// Similarity confidence (0-100, where 100 is an exact match)
    pub confidence: u8,
}

/// Resolves a free-text city name to the best-matching known city.
///
/// Resolution fails rather than guessing: a best match below the
/// confidence floor surfaces as [`MatchingError::NoConfidentMatch`], which
/// callers turn into a not-found response.
#[derive(Debug, Clone)]
pub struct CityResolver {
    confidence_floor: u8,
}

impl CityResolver {
    /// Create a resolver with the given confidence floor (0-100).
    pub fn new(confidence_floor: u8) -> Self {
        Self { confidence_floor }
    }

    /// Find the known city most similar to `query`.
    ///
    /// Ties may resolve to any maximal-score candidate; callers must not
    /// depend on tie order.
    ///
    /// # Errors
    ///
    /// - [`MatchingError::NoCandidates`] when `known_cities` is empty.
    /// - [`MatchingError::NoConfidentMatch`] when the best score is below
    ///   the confidence floor.
    pub fn resolve<'a, I>(&self, query: &str, known_cities: I) -> MatchingResult<CityMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query_sorted = sort_tokens(query);

        let mut best: Option<(&str, u8)> = None;
        for city in known_cities {
            let score = ratio(&query_sorted, &sort_tokens(city));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((city, score));
            }
        }

        match best {
            None => Err(MatchingError::NoCandidates),
            Some((city, confidence)) if confidence >= self.confidence_floor => Ok(CityMatch {
                city: city.to_string(),
                confidence,
            }),
            Some((city, confidence)) => {
                tracing::debug!(
                    query,
                    best_candidate = city,
                    confidence,
                    floor = self.confidence_floor,
                    "city resolution below confidence floor"
                );
                Err(MatchingError::NoConfidentMatch {
                    query: query.to_string(),
                })
            }
        }
    }
}
