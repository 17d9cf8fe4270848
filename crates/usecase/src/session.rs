use std::sync::Arc;

use facet_filter_domain::{
    MediaType,
    analytics::ResultStats,
    filter::{FilterState, Inclusion},
    merge::QueryConstraints,
    model::Asset,
    summary::{ActiveFilters, ChipTarget},
};
use facet_filter_shared_kernel::DomainResult;

use crate::evaluate::Evaluator;

struct Memo {
    state: Arc<FilterState>,
    indices: Arc<[usize]>,
}

/// Owns the one current [`FilterState`] over an immutable catalog.
///
/// Every transition publishes a fresh `Arc`; readers holding an older state
/// keep a valid snapshot. Results are recomputed only when the published
/// state changes identity.
pub struct FilterSession {
    catalog: Arc<[Asset]>,
    state: Arc<FilterState>,
    evaluator: Evaluator,
    memo: Option<Memo>,
    evaluations: usize,
}

impl FilterSession {
    pub fn new(catalog: Arc<[Asset]>) -> Self {
        Self::with_evaluator(catalog, Evaluator::sequential())
    }

    pub fn with_evaluator(catalog: Arc<[Asset]>, evaluator: Evaluator) -> Self {
        Self {
            catalog,
            state: Arc::new(FilterState::default()),
            evaluator,
            memo: None,
            evaluations: 0,
        }
    }

    pub fn catalog(&self) -> &[Asset] {
        &self.catalog
    }

    pub fn state(&self) -> Arc<FilterState> {
        Arc::clone(&self.state)
    }

    /// Publishes `next`. An equal state keeps the current identity so the memo stays valid.
    pub fn replace_state(&mut self, next: FilterState) {
        if next != *self.state {
            self.state = Arc::new(next);
        }
    }

    fn transition(&mut self, f: impl FnOnce(&FilterState) -> FilterState) {
        let next = f(self.state.as_ref());
        self.replace_state(next);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.transition(|s| s.toggle_tag(tag));
    }

    pub fn toggle_entity(&mut self, entity: &str) {
        self.transition(|s| s.toggle_entity(entity));
    }

    /// Puts `tag` into an explicit inclusion, bypassing the toggle cycle.
    pub fn set_tag(&mut self, tag: &str, inclusion: Option<Inclusion>) {
        self.transition(|s| s.with_tag(tag, inclusion));
    }

    pub fn set_entity(&mut self, entity: &str, inclusion: Option<Inclusion>) {
        self.transition(|s| s.with_entity(entity, inclusion));
    }

    pub fn toggle_media_type(&mut self, media_type: MediaType) {
        self.transition(|s| s.toggle_media_type(media_type));
    }

    pub fn toggle_source(&mut self, source: &str) {
        self.transition(|s| s.toggle_source(source));
    }

    pub fn toggle_color(&mut self, color: &str) {
        self.transition(|s| s.toggle_color(color));
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.transition(|s| s.with_search_query(query));
    }

    pub fn set_score_range(&mut self, lo: f64, hi: f64) -> DomainResult<()> {
        let next = self.state.with_score_range(lo, hi)?;
        self.replace_state(next);
        Ok(())
    }

    pub fn merge(&mut self, constraints: &QueryConstraints) {
        self.transition(|s| s.merge(constraints));
    }

    pub fn remove_chip(&mut self, target: &ChipTarget) {
        self.transition(|s| s.without(target));
    }

    pub fn reset_all(&mut self) {
        self.transition(FilterState::reset_all);
    }

    /// Matching catalog positions for the current state, memoized on state identity.
    pub fn result_indices(&mut self) -> Arc<[usize]> {
        if let Some(memo) = &self.memo {
            if Arc::ptr_eq(&memo.state, &self.state) {
                return Arc::clone(&memo.indices);
            }
        }

        let indices: Arc<[usize]> = self.evaluator.evaluate(&self.catalog, &self.state).into();
        self.evaluations += 1;
        tracing::debug!(
            matched = indices.len(),
            catalog = self.catalog.len(),
            parallel = self.evaluator.is_parallel(),
            "filter re-evaluated"
        );
        self.memo = Some(Memo { state: Arc::clone(&self.state), indices: Arc::clone(&indices) });
        indices
    }

    /// Matching assets in catalog order.
    pub fn results(&mut self) -> Vec<&Asset> {
        let indices = self.result_indices();
        indices.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn active_filters(&self) -> ActiveFilters {
        ActiveFilters::of(&self.state)
    }

    pub fn has_active_filters(&self) -> bool {
        facet_filter_domain::summary::has_active_filters(&self.state)
    }

    pub fn stats(&mut self, top_entities: Option<usize>) -> ResultStats {
        let indices = self.result_indices();
        ResultStats::from_assets(indices.iter().map(|&i| &self.catalog[i]), top_entities)
    }

    /// Number of full catalog evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}
