//! Facet transitions on [`FilterState`].
//!
//! Tags and entities cycle through three states; media types, sources and
//! colors are plain membership flips.

use facet_filter_shared_kernel::{DomainError, DomainResult, MediaType};

use super::{
    facet::Inclusion,
    range::{SCORE_MAX, SCORE_MIN, ScoreRange},
    state::FilterState,
};

impl FilterState {
    /// unconstrained → required → forbidden → unconstrained
    #[must_use]
    pub fn toggle_tag(&self, tag: &str) -> Self {
        self.derive(|s| s.tags.cycle(tag))
    }

    /// Same 3-cycle as [`toggle_tag`](Self::toggle_tag), on the entity facet.
    #[must_use]
    pub fn toggle_entity(&self, entity: &str) -> Self {
        self.derive(|s| s.entities.cycle(entity))
    }

    #[must_use]
    pub fn toggle_media_type(&self, media_type: MediaType) -> Self {
        self.derive(|s| s.media_types.toggle(media_type))
    }

    #[must_use]
    pub fn toggle_source(&self, source: &str) -> Self {
        self.derive(|s| s.sources.toggle(source.to_string()))
    }

    #[must_use]
    pub fn toggle_color(&self, color: &str) -> Self {
        self.derive(|s| s.colors.toggle(color.to_string()))
    }

    /// Puts `tag` directly into the given state; `None` clears it.
    #[must_use]
    pub fn with_tag(&self, tag: &str, inclusion: Option<Inclusion>) -> Self {
        self.derive(|s| s.tags.set(tag, inclusion))
    }

    #[must_use]
    pub fn with_entity(&self, entity: &str, inclusion: Option<Inclusion>) -> Self {
        self.derive(|s| s.entities.set(entity, inclusion))
    }

    #[must_use]
    pub fn with_search_query(&self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.derive(|s| s.search_query = query)
    }

    /// Replaces the score range after checking `SCORE_MIN <= lo <= hi <= SCORE_MAX`.
    pub fn with_score_range(&self, lo: f64, hi: f64) -> DomainResult<Self> {
        let range = ScoreRange::new(lo, hi);
        if !range.is_valid_score_range() {
            return Err(DomainError::RangeValidation {
                field: "score".to_string(),
                min: SCORE_MIN.to_string(),
                max: SCORE_MAX.to_string(),
            });
        }
        Ok(self.derive(|s| s.score_range = range))
    }

    /// Back to the initial state: no facets, empty query, full ranges.
    #[must_use]
    pub fn reset_all(&self) -> Self {
        Self::default()
    }
}
