//! Fuzzy city matching.
//!
//! Both the query-side resolver and the record-side matcher score city
//! names with the same token-sort similarity ratio, so "Tel-Aviv " and
//! "Aviv Tel" land on the gazetteer's "Tel Aviv" regardless of word order
//! or stray punctuation.

pub mod city_resolver;
pub mod record_matcher;
pub mod token_sort;

pub use city_resolver::{CityMatch, CityResolver};
pub use record_matcher::RecordCityMatcher;
pub use token_sort::{ratio, sort_tokens, token_sort_ratio};
