use facet_filter_shared_kernel::MediaType;

use super::{
    facet::{FacetSet, TriStateFacet},
    range::{DEFAULT_YEAR_RANGE, FULL_SCORE_RANGE, ScoreRange, YearRange},
};

/// Complete filter state. Transitions never mutate; they return a new value.
///
/// Empty facet sets mean "unconstrained", not "match nothing".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub(crate) search_query: String,
    pub(crate) tags: TriStateFacet,
    pub(crate) entities: TriStateFacet,
    pub(crate) media_types: FacetSet<MediaType>,
    pub(crate) sources: FacetSet<String>,
    pub(crate) colors: FacetSet<String>,
    pub(crate) score_range: ScoreRange,
    pub(crate) year_range: YearRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            tags: TriStateFacet::default(),
            entities: TriStateFacet::default(),
            media_types: FacetSet::default(),
            sources: FacetSet::default(),
            colors: FacetSet::default(),
            score_range: FULL_SCORE_RANGE,
            year_range: DEFAULT_YEAR_RANGE,
        }
    }
}

impl FilterState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn tags(&self) -> &TriStateFacet {
        &self.tags
    }

    pub fn entities(&self) -> &TriStateFacet {
        &self.entities
    }

    pub fn media_types(&self) -> &FacetSet<MediaType> {
        &self.media_types
    }

    pub fn sources(&self) -> &FacetSet<String> {
        &self.sources
    }

    pub fn colors(&self) -> &FacetSet<String> {
        &self.colors
    }

    pub fn score_range(&self) -> ScoreRange {
        self.score_range
    }

    /// Carried for presentation and merging; the predicate does not read it.
    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn selected_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.required()
    }

    pub fn excluded_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.forbidden()
    }

    pub fn selected_entities(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.required()
    }

    pub fn excluded_entities(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.forbidden()
    }

    /// Applies `f` to a copy of `self`.
    pub(crate) fn derive(&self, f: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        f(&mut next);
        next
    }
}
