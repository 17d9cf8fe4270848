// src/app.rs
use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use facet_filter_domain::{filter::Inclusion, vocabulary::Vocabulary};
use facet_filter_infra::{FileQueryParser, GeminiQueryParser, JsonCatalogSource, ParserConfig};
use facet_filter_shared_kernel::ApplicationError;
use facet_filter_usecase::{Evaluator, FilterSession, LoadCatalog, SearchOutcome, SmartSearch};
use tracing_subscriber::EnvFilter;

use crate::{
    cli,
    config::{Config, FilterFlags},
    output::{self, Report},
};

pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    // .env は任意
    let _ = dotenvy::dotenv();
    init_tracing(config.verbose);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    execute(&config, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs one query against the catalog and writes the report to `out`.
pub fn execute(config: &Config, out: &mut impl Write) -> Result<()> {
    let source = JsonCatalogSource::new(&config.catalog);
    let catalog = LoadCatalog::new(&source)
        .run()
        .with_context(|| format!("failed to load catalog {}", config.catalog.display()))?;
    let evaluator = Evaluator::parallel(config.jobs).context("failed to build evaluation pool")?;
    let mut session = FilterSession::with_evaluator(catalog, evaluator);

    apply_flags(&mut session, &config.filters)?;
    apply_recorded(&mut session, &config.parsed)?;
    apply_asks(&mut session, &config.asks)?;

    let indices = session.result_indices();
    let stats = config.stats.then(|| session.stats(config.top_entities));
    let filters = config.chips.then(|| session.active_filters());
    let vocabulary = config.vocabulary.then(|| {
        let all = Vocabulary::from_catalog(session.catalog());
        match &config.facet_search {
            Some(query) => all.narrowed(query),
            None => all,
        }
    });
    let catalog = session.catalog();
    let report = Report {
        total: catalog.len(),
        matched: indices.len(),
        results: indices.iter().map(|&i| &catalog[i]).collect(),
        filters,
        stats,
        vocabulary,
    };
    output::emit(&report, config, out)
}

fn apply_flags(session: &mut FilterSession, flags: &FilterFlags) -> Result<()> {
    if let Some(query) = &flags.query {
        session.set_search_query(query);
    }
    for tag in &flags.tags {
        session.set_tag(tag, Some(Inclusion::Required));
    }
    for tag in &flags.excluded_tags {
        session.set_tag(tag, Some(Inclusion::Forbidden));
    }
    for entity in &flags.entities {
        session.set_entity(entity, Some(Inclusion::Required));
    }
    for entity in &flags.excluded_entities {
        session.set_entity(entity, Some(Inclusion::Forbidden));
    }
    // 重複指定でトグルが打ち消し合わないよう未選択のものだけ切り替える
    for &media_type in &flags.media_types {
        if !session.state().media_types().contains(&media_type) {
            session.toggle_media_type(media_type);
        }
    }
    for source in &flags.sources {
        if !session.state().sources().contains(source.as_str()) {
            session.toggle_source(source);
        }
    }
    for color in &flags.colors {
        if !session.state().colors().contains(color.as_str()) {
            session.toggle_color(color);
        }
    }
    if flags.min_score.is_some() || flags.max_score.is_some() {
        let current = session.state().score_range();
        session
            .set_score_range(flags.min_score.unwrap_or(current.lo), flags.max_score.unwrap_or(current.hi))
            .context("invalid score range")?;
    }
    Ok(())
}

fn apply_recorded(session: &mut FilterSession, paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        let parser = FileQueryParser::new(path);
        let label = path.display().to_string();
        let outcome = SmartSearch::new(&parser)
            .run(&label, session)
            .with_context(|| format!("failed to apply recorded response {label}"))?;
        report_outcome(&label, &outcome);
    }
    Ok(())
}

fn apply_asks(session: &mut FilterSession, asks: &[String]) -> Result<()> {
    if asks.is_empty() {
        return Ok(());
    }

    let parser = match ParserConfig::from_env() {
        Some(config) => {
            let vocabulary = Vocabulary::from_catalog(session.catalog());
            Some(GeminiQueryParser::new(config, &vocabulary).context("failed to set up query parser")?)
        }
        None => None,
    };
    let search = match &parser {
        Some(parser) => SmartSearch::new(parser),
        None => SmartSearch::disabled(),
    };

    for text in asks {
        match search.run(text, session) {
            Ok(outcome) => report_outcome(text, &outcome),
            Err(ApplicationError::SmartSearchDisabled { reason }) => {
                tracing::warn!("natural-language search disabled ({reason}); set GEMINI_API_KEY to enable --ask");
                break;
            }
            Err(e) => return Err(e).context("natural-language search failed"),
        }
    }
    Ok(())
}

fn report_outcome(input: &str, outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Applied(constraints) => tracing::info!(input, ?constraints, "query merged"),
        SearchOutcome::Skipped => tracing::debug!("blank query skipped"),
        SearchOutcome::NoResult => tracing::info!(input, "query produced no filters; state unchanged"),
    }
}
