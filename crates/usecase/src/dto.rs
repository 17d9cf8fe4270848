use facet_filter_domain::{MediaType, merge::QueryConstraints, model::Asset};
use facet_filter_ports::{catalog::AssetRecord, query_parser::ParsedQuery};

/// Maps a stored record onto the domain model.
pub fn record_to_asset(record: AssetRecord) -> Asset {
    let mut builder = Asset::builder(record.id, record.media_type)
        .title(record.title)
        .description(record.description)
        .tags(record.tags)
        .entities(record.entities)
        .source(record.source)
        .score(record.score)
        .year(record.year)
        .file_size(record.file_size)
        .color(record.color);
    if let Some(url) = record.url {
        builder = builder.url(url);
    }
    if let Some(seconds) = record.duration {
        builder = builder.duration(seconds);
    }
    builder.build()
}

/// Maps untrusted parser output onto merge constraints.
///
/// Unrecognised media type names are dropped one by one.
pub fn parsed_to_constraints(parsed: ParsedQuery) -> QueryConstraints {
    let media_types = parsed
        .media_types
        .unwrap_or_default()
        .iter()
        .filter_map(|raw| match raw.parse::<MediaType>() {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(value = %raw, "dropping media type from parser response: {e}");
                None
            }
        })
        .collect();

    QueryConstraints {
        search_query: parsed.search_query,
        tags: parsed.tags.unwrap_or_default(),
        entities: parsed.entities.unwrap_or_default(),
        media_types,
        sources: parsed.sources.unwrap_or_default(),
        min_score: parsed.min_score.filter(|v| v.is_finite()),
        max_score: parsed.max_score.filter(|v| v.is_finite()),
        min_year: parsed.min_year.and_then(to_year),
        max_year: parsed.max_year.and_then(to_year),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_year(value: f64) -> Option<i32> {
    (value.is_finite() && value.abs() <= f64::from(i32::MAX)).then(|| value.round() as i32)
}
