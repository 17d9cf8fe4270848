//! Active-filter chips.
//!
//! Each chip names exactly one constraint and knows how to remove it.

use facet_filter_shared_kernel::MediaType;
use serde::Serialize;

use crate::filter::{FilterState, Inclusion};

/// The single constraint a chip stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChipTarget {
    SearchQuery,
    MediaType(MediaType),
    Source(String),
    SelectedTag(String),
    ExcludedTag(String),
    SelectedEntity(String),
    ExcludedEntity(String),
    Color(String),
}

/// A removable descriptor for one active constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: String,
    pub target: ChipTarget,
}

impl Chip {
    fn new(label: String, target: ChipTarget) -> Self {
        Self { label, target }
    }
}

/// Snapshot of what is currently constraining the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilters {
    pub active: bool,
    pub chips: Vec<Chip>,
}

impl ActiveFilters {
    pub fn of(state: &FilterState) -> Self {
        Self { active: has_active_filters(state), chips: chips(state) }
    }
}

/// A narrowed score or year range on its own does not count as active.
pub fn has_active_filters(state: &FilterState) -> bool {
    !state.search_query().is_empty()
        || !state.tags().is_empty()
        || !state.entities().is_empty()
        || !state.media_types().is_empty()
        || !state.sources().is_empty()
        || !state.colors().is_empty()
}

/// Chips in display order: query, media types, sources, selected tags,
/// excluded tags, selected entities, excluded entities, colors.
pub fn chips(state: &FilterState) -> Vec<Chip> {
    let mut out = Vec::new();

    if !state.search_query().is_empty() {
        out.push(Chip::new(format!("\"{}\"", state.search_query()), ChipTarget::SearchQuery));
    }
    out.extend(
        state
            .media_types()
            .iter()
            .map(|t| Chip::new(t.to_string(), ChipTarget::MediaType(*t))),
    );
    out.extend(
        state
            .sources()
            .iter()
            .map(|s| Chip::new(s.clone(), ChipTarget::Source(s.clone()))),
    );
    out.extend(
        state
            .selected_tags()
            .map(|t| Chip::new(format!("#{t}"), ChipTarget::SelectedTag(t.to_string()))),
    );
    out.extend(
        state
            .excluded_tags()
            .map(|t| Chip::new(format!("NOT #{t}"), ChipTarget::ExcludedTag(t.to_string()))),
    );
    out.extend(
        state
            .selected_entities()
            .map(|e| Chip::new(format!("@{e}"), ChipTarget::SelectedEntity(e.to_string()))),
    );
    out.extend(
        state
            .excluded_entities()
            .map(|e| Chip::new(format!("NOT @{e}"), ChipTarget::ExcludedEntity(e.to_string()))),
    );
    out.extend(
        state
            .colors()
            .iter()
            .map(|c| Chip::new(format!("color {c}"), ChipTarget::Color(c.clone()))),
    );

    out
}

impl FilterState {
    /// Removes exactly the constraint `target` refers to.
    ///
    /// A target that is not currently active leaves the state unchanged; a
    /// `SelectedTag` target does not clear the same tag when it is excluded.
    #[must_use]
    pub fn without(&self, target: &ChipTarget) -> Self {
        self.derive(|s| match target {
            ChipTarget::SearchQuery => s.search_query.clear(),
            ChipTarget::MediaType(t) => s.media_types.remove(t),
            ChipTarget::Source(v) => s.sources.remove(v.as_str()),
            ChipTarget::SelectedTag(v) => {
                if s.tags.inclusion(v) == Some(Inclusion::Required) {
                    s.tags.set(v, None);
                }
            }
            ChipTarget::ExcludedTag(v) => {
                if s.tags.inclusion(v) == Some(Inclusion::Forbidden) {
                    s.tags.set(v, None);
                }
            }
            ChipTarget::SelectedEntity(v) => {
                if s.entities.inclusion(v) == Some(Inclusion::Required) {
                    s.entities.set(v, None);
                }
            }
            ChipTarget::ExcludedEntity(v) => {
                if s.entities.inclusion(v) == Some(Inclusion::Forbidden) {
                    s.entities.set(v, None);
                }
            }
            ChipTarget::Color(v) => s.colors.remove(v.as_str()),
        })
    }
}
