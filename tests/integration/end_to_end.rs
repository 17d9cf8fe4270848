// tests/integration/end_to_end.rs
use facet_filter_domain::{MediaType, summary::ChipTarget};
use facet_filter_infra::JsonCatalogSource;
use facet_filter_usecase::{Evaluator, FilterSession, LoadCatalog};

use crate::common::CatalogFixture;

fn session(fixture: &CatalogFixture, evaluator: Evaluator) -> FilterSession {
    let source = JsonCatalogSource::new(fixture.catalog());
    let catalog = LoadCatalog::new(&source).run().expect("catalog loads");
    FilterSession::with_evaluator(catalog, evaluator)
}

fn ids(session: &mut FilterSession) -> Vec<String> {
    session.results().iter().map(|a| a.id.to_string()).collect()
}

#[test]
fn tag_and_type_then_exclusion() {
    let fixture = CatalogFixture::new();
    let mut session = session(&fixture, Evaluator::sequential());

    session.toggle_tag("neon");
    session.toggle_media_type(MediaType::Video);
    assert_eq!(ids(&mut session), vec!["asset-1"]);

    session.toggle_tag("urban");
    session.toggle_tag("urban");
    assert!(ids(&mut session).is_empty());
}

#[test]
fn entities_match_any_and_tags_match_all() {
    let fixture = CatalogFixture::new();
    let mut session = session(&fixture, Evaluator::sequential());

    session.toggle_entity("NASA");
    session.toggle_entity("Taylor Swift");
    assert_eq!(ids(&mut session), vec!["asset-2", "asset-3", "asset-4"]);

    session.toggle_tag("nature");
    session.toggle_tag("space");
    assert_eq!(ids(&mut session), vec!["asset-3"]);
}

#[test]
fn text_search_covers_title_description_and_tags() {
    let fixture = CatalogFixture::new();
    let mut session = session(&fixture, Evaluator::sequential());

    session.set_search_query("NEON");
    assert_eq!(ids(&mut session), vec!["asset-1", "asset-5"]);

    session.set_search_query("mural");
    assert_eq!(ids(&mut session), vec!["asset-6"]);
}

#[test]
fn score_bounds_are_inclusive() {
    let fixture = CatalogFixture::new();
    let mut session = session(&fixture, Evaluator::sequential());
    session.set_score_range(85.0, 100.0).unwrap();
    assert_eq!(ids(&mut session), vec!["asset-1", "asset-3", "asset-6"]);
}

#[test]
fn chips_remove_exactly_their_constraint() {
    let fixture = CatalogFixture::new();
    let mut session = session(&fixture, Evaluator::sequential());
    session.toggle_source("Reddit");
    session.toggle_color("#f59e0b");
    assert_eq!(ids(&mut session), vec!["asset-5"]);

    session.remove_chip(&ChipTarget::Color("#f59e0b".into()));
    assert_eq!(ids(&mut session), vec!["asset-1", "asset-5"]);

    session.reset_all();
    assert!(!session.has_active_filters());
    assert_eq!(ids(&mut session).len(), 6);
}

#[test]
fn parallel_evaluation_matches_sequential() {
    let fixture = CatalogFixture::new();
    let mut sequential = session(&fixture, Evaluator::sequential());
    let mut parallel = session(&fixture, Evaluator::parallel(3).expect("pool builds"));
    for s in [&mut sequential, &mut parallel] {
        s.toggle_tag("urban");
        s.toggle_tag("urban");
        s.toggle_media_type(MediaType::Video);
        s.toggle_media_type(MediaType::Audio);
    }
    assert_eq!(ids(&mut sequential), ids(&mut parallel));
    assert_eq!(ids(&mut parallel), vec!["asset-3", "asset-4"]);
}

#[test]
fn stats_summarise_current_results() {
    let fixture = CatalogFixture::new();
    let mut session = session(&fixture, Evaluator::sequential());
    session.toggle_tag("nature");
    let stats = session.stats(Some(1));
    assert_eq!(stats.total, 2);
    // (60 + 85) / 2 = 72.5 -> 73
    assert_eq!(stats.average_score, 73);
    assert_eq!(stats.top_entities.len(), 1);
    assert_eq!(stats.top_entities[0].entity, "NASA");
    assert_eq!(stats.top_entities[0].count, 2);
}
