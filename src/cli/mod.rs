// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

pub use args::Args;
use clap::Parser;
use facet_filter_shared_kernel::{PresentationError, Result};

use crate::config::{Config, FilterFlags};

/// Parse the process arguments into a [`Config`].
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Build a [`Config`] from already parsed arguments.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_score_bounds(args.min_score, args.max_score)?;
    validate_disjoint("--tag", &args.tag, "--exclude-tag", &args.exclude_tag)?;
    validate_disjoint("--entity", &args.entity, "--exclude-entity", &args.exclude_entity)?;

    Ok(Config {
        catalog: args.catalog.clone(),
        filters: make_filter_flags(args),
        asks: args.ask.clone(),
        parsed: args.parsed.clone(),
        format: args.format.into(),
        chips: args.chips,
        stats: args.stats,
        top_entities: args.top_entities,
        vocabulary: args.vocabulary,
        facet_search: args.facet_search.clone(),
        jobs: args.jobs.unwrap_or_else(num_cpus::get).max(1),
        verbose: args.verbose,
    })
}

fn make_filter_flags(args: &Args) -> FilterFlags {
    FilterFlags {
        query: args.query.clone(),
        tags: args.tag.clone(),
        excluded_tags: args.exclude_tag.clone(),
        entities: args.entity.clone(),
        excluded_entities: args.exclude_entity.clone(),
        media_types: args.media_types.clone(),
        sources: args.source.clone(),
        colors: args.color.clone(),
        min_score: args.min_score,
        max_score: args.max_score,
    }
}

fn validate_score_bounds(min: Option<f64>, max: Option<f64>) -> Result<()> {
    if let (Some(lo), Some(hi)) = (min, max)
        && lo > hi
    {
        return Err(PresentationError::InvalidValue {
            flag: "--min-score".to_string(),
            value: lo.to_string(),
            reason: format!("must not exceed --max-score ({hi})"),
        }
        .into());
    }
    Ok(())
}

/// A value cannot be both required and excluded.
fn validate_disjoint(flag: &str, selected: &[String], other: &str, excluded: &[String]) -> Result<()> {
    if let Some(value) = selected.iter().find(|v| excluded.contains(*v)) {
        return Err(PresentationError::ArgumentParsing {
            argument: flag.to_string(),
            reason: format!("'{value}' is also given to {other}"),
        }
        .into());
    }
    Ok(())
}
