//! Folding a structured natural-language parse into an existing filter.

use facet_filter_shared_kernel::MediaType;

use crate::filter::{FilterState, Inclusion};

/// Constraints extracted from a natural-language query.
///
/// Empty collections and `None` fields leave the corresponding part of the
/// filter unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryConstraints {
    pub search_query: Option<String>,
    pub tags: Vec<String>,
    pub entities: Vec<String>,
    pub media_types: Vec<MediaType>,
    pub sources: Vec<String>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl QueryConstraints {
    /// True when merging would not change any state.
    pub fn is_empty(&self) -> bool {
        self.search_query.as_deref().is_none_or(str::is_empty)
            && self.tags.is_empty()
            && self.entities.is_empty()
            && self.media_types.is_empty()
            && self.sources.is_empty()
            && self.min_score.is_none()
            && self.max_score.is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
    }
}

impl FilterState {
    /// Merges `constraints` into a copy of `self`.
    ///
    /// - query: replaced only by a non-empty value (whitespace counts)
    /// - tags / entities: unioned into the required side; a value that was
    ///   forbidden becomes required
    /// - media types / sources: replaced wholesale by a non-empty list
    /// - score / year bounds: each replaced only when supplied, without
    ///   checking `lo <= hi`
    ///
    /// Values are taken exactly as given. Merging the same constraints twice
    /// gives the same state as merging them once.
    #[must_use]
    pub fn merge(&self, constraints: &QueryConstraints) -> Self {
        self.derive(|s| {
            if let Some(query) = constraints.search_query.as_deref().filter(|q| !q.is_empty()) {
                s.search_query = query.to_string();
            }

            for tag in &constraints.tags {
                s.tags.set(tag, Some(Inclusion::Required));
            }
            for entity in &constraints.entities {
                s.entities.set(entity, Some(Inclusion::Required));
            }

            if !constraints.media_types.is_empty() {
                s.media_types = constraints.media_types.iter().copied().collect();
            }
            if !constraints.sources.is_empty() {
                s.sources = constraints.sources.iter().cloned().collect();
            }

            if let Some(lo) = constraints.min_score {
                s.score_range = s.score_range.with_lo(lo);
            }
            if let Some(hi) = constraints.max_score {
                s.score_range = s.score_range.with_hi(hi);
            }
            if let Some(lo) = constraints.min_year {
                s.year_range = s.year_range.with_lo(lo);
            }
            if let Some(hi) = constraints.max_year {
                s.year_range = s.year_range.with_hi(hi);
            }
        })
    }
}
