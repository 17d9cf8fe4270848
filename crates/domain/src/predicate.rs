//! Asset/filter predicate.
//!
//! Every gate is independent and AND-ed with the others. A gate whose facet
//! is empty always passes, except the score gate which is always active.

use crate::{filter::FilterState, model::Asset};

/// Returns `true` if `asset` passes every active gate of `state`.
pub fn matches(asset: &Asset, state: &FilterState) -> bool {
    text_gate(asset, state)
        && tag_gates(asset, state)
        && entity_gates(asset, state)
        && media_type_gate(asset, state)
        && source_gate(asset, state)
        && score_gate(asset, state)
        && color_gate(asset, state)
}

/// Matching assets in catalog order.
pub fn filter_catalog<'a>(catalog: &'a [Asset], state: &FilterState) -> Vec<&'a Asset> {
    catalog.iter().filter(|asset| matches(asset, state)).collect()
}

/// Catalog positions of the matching assets, ascending.
pub fn matching_indices(catalog: &[Asset], state: &FilterState) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter_map(|(i, asset)| matches(asset, state).then_some(i))
        .collect()
}

fn text_gate(asset: &Asset, state: &FilterState) -> bool {
    let query = state.search_query();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    contains_folded(&asset.title, &needle)
        || contains_folded(&asset.description, &needle)
        || contains_folded(&asset.source, &needle)
        || asset.tags.iter().any(|t| contains_folded(t, &needle))
        || asset.entities.iter().any(|e| contains_folded(e, &needle))
}

#[inline]
fn contains_folded(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

// タグ: 選択は AND、除外は OR
fn tag_gates(asset: &Asset, state: &FilterState) -> bool {
    state.selected_tags().all(|tag| asset.has_tag(tag)) && !state.excluded_tags().any(|tag| asset.has_tag(tag))
}

// エンティティ: 選択は OR、除外は OR
fn entity_gates(asset: &Asset, state: &FilterState) -> bool {
    let entities = state.entities();
    let included = !entities.has_required() || entities.required().any(|e| asset.has_entity(e));
    included && !entities.forbidden().any(|e| asset.has_entity(e))
}

fn media_type_gate(asset: &Asset, state: &FilterState) -> bool {
    let types = state.media_types();
    types.is_empty() || types.contains(&asset.media_type)
}

fn source_gate(asset: &Asset, state: &FilterState) -> bool {
    let sources = state.sources();
    sources.is_empty() || sources.contains(asset.source.as_str())
}

fn score_gate(asset: &Asset, state: &FilterState) -> bool {
    state.score_range().contains(asset.score)
}

fn color_gate(asset: &Asset, state: &FilterState) -> bool {
    let colors = state.colors();
    colors.is_empty() || colors.contains(asset.color.as_str())
}

#[cfg(test)]
mod tests {
    use facet_filter_shared_kernel::MediaType;

    use super::*;
    use crate::filter::Inclusion;

    fn neon_clip() -> Asset {
        Asset::builder("asset-1", MediaType::Video)
            .title("Night drive")
            .description("Rainy streets after dark")
            .tags(["neon", "urban"])
            .source("Reddit")
            .score(92.0)
            .color("#a855f7")
            .build()
    }

    fn nasa_photo() -> Asset {
        Asset::builder("asset-2", MediaType::Image)
            .title("Blue marble")
            .description("Earth from orbit")
            .tags(["nature"])
            .entities(["NASA"])
            .source("Unsplash")
            .score(60.0)
            .color("#3b82f6")
            .build()
    }

    fn catalog() -> Vec<Asset> {
        vec![neon_clip(), nasa_photo()]
    }

    fn ids(assets: &[&Asset]) -> Vec<String> {
        assets.iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn default_state_matches_everything() {
        let catalog = catalog();
        assert_eq!(filter_catalog(&catalog, &FilterState::default()).len(), 2);
    }

    #[test]
    fn selected_tags_need_all_of_them() {
        let state = FilterState::default().toggle_tag("neon").toggle_tag("nature");
        assert!(filter_catalog(&catalog(), &state).is_empty());

        let state = FilterState::default().toggle_tag("neon").toggle_tag("urban");
        assert_eq!(ids(&filter_catalog(&catalog(), &state)), vec!["asset-1"]);
    }

    #[test]
    fn any_excluded_tag_rejects() {
        let state = FilterState::default()
            .with_tag("urban", Some(Inclusion::Forbidden))
            .with_tag("unused", Some(Inclusion::Forbidden));
        assert_eq!(ids(&filter_catalog(&catalog(), &state)), vec!["asset-2"]);
    }

    #[test]
    fn selected_entities_need_any_of_them() {
        let state = FilterState::default().toggle_entity("NASA").toggle_entity("Pixar");
        assert_eq!(ids(&filter_catalog(&catalog(), &state)), vec!["asset-2"]);
    }

    #[test]
    fn excluded_entity_rejects() {
        let state = FilterState::default().with_entity("NASA", Some(Inclusion::Forbidden));
        assert_eq!(ids(&filter_catalog(&catalog(), &state)), vec!["asset-1"]);
    }

    #[test]
    fn text_query_is_case_insensitive_over_all_text_fields() {
        let catalog = catalog();
        for (query, expected) in [
            ("NIGHT", vec!["asset-1"]),
            ("orbit", vec!["asset-2"]),
            ("unspl", vec!["asset-2"]),
            ("URB", vec!["asset-1"]),
            ("nas", vec!["asset-2"]),
            ("zzz", vec![]),
        ] {
            let state = FilterState::default().with_search_query(query);
            assert_eq!(ids(&filter_catalog(&catalog, &state)), expected, "query {query}");
        }
    }

    #[test]
    fn media_type_source_and_color_are_or_sets() {
        let catalog = catalog();
        let state = FilterState::default()
            .toggle_media_type(MediaType::Video)
            .toggle_media_type(MediaType::Image);
        assert_eq!(filter_catalog(&catalog, &state).len(), 2);

        let state = FilterState::default().toggle_source("Unsplash").toggle_source("Flickr");
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["asset-2"]);

        let state = FilterState::default().toggle_color("#a855f7");
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["asset-1"]);
    }

    #[test]
    fn score_bounds_are_inclusive() {
        let catalog = catalog();
        let state = FilterState::default().with_score_range(60.0, 92.0).unwrap();
        assert_eq!(filter_catalog(&catalog, &state).len(), 2);

        let state = FilterState::default().with_score_range(61.0, 91.0).unwrap();
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn unknown_vocabulary_is_well_defined() {
        let state = FilterState::default().toggle_tag("not-a-real-tag");
        assert!(filter_catalog(&catalog(), &state).is_empty());
    }

    #[test]
    fn end_to_end_example() {
        let catalog = catalog();
        let state = FilterState::default().toggle_tag("neon").toggle_media_type(MediaType::Video);
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["asset-1"]);

        let state = state.with_tag("urban", Some(Inclusion::Forbidden));
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn indices_follow_catalog_order() {
        let catalog = vec![nasa_photo(), neon_clip(), nasa_photo()];
        let state = FilterState::default().toggle_entity("NASA");
        assert_eq!(matching_indices(&catalog, &state), vec![0, 2]);
    }
}
