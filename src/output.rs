// src/output.rs
use std::io::Write;

use facet_filter_domain::{analytics::ResultStats, model::Asset, summary::ActiveFilters, vocabulary::Vocabulary};
use serde::Serialize;

use crate::config::{Config, OutputFormat};

/// Everything a run prints, gathered before any output is written.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub total: usize,
    pub matched: usize,
    pub results: Vec<&'a Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<ActiveFilters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ResultStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vocabulary>,
}

/// Emit the report in the configured output format.
pub fn emit(report: &Report<'_>, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match config.format {
        OutputFormat::Table => output_table(report, out),
        OutputFormat::Json => output_json(report, out),
        OutputFormat::Jsonl => output_jsonl(report, out),
    }
}

fn output_json(report: &Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// One asset per line, then one line per requested section.
fn output_jsonl(report: &Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    for asset in &report.results {
        writeln!(out, "{}", serde_json::to_string(asset)?)?;
    }
    if let Some(filters) = &report.filters {
        writeln!(out, "{}", serde_json::json!({ "filters": filters }))?;
    }
    if let Some(stats) = &report.stats {
        writeln!(out, "{}", serde_json::json!({ "stats": stats }))?;
    }
    if let Some(vocabulary) = &report.vocabulary {
        writeln!(out, "{}", serde_json::json!({ "vocabulary": vocabulary }))?;
    }
    Ok(())
}

fn output_table(report: &Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    write_table_rows(report, out)?;
    if let Some(filters) = &report.filters {
        write_filters(filters, out)?;
    }
    if let Some(stats) = &report.stats {
        write_stats(stats, out)?;
    }
    if let Some(vocabulary) = &report.vocabulary {
        write_vocabulary(vocabulary, out)?;
    }
    Ok(())
}

fn write_table_rows(report: &Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{:<12} {:<8} {:>5} {:>4}  {:<12} TITLE", "ID", "TYPE", "SCORE", "YEAR", "SOURCE")?;
    writeln!(out, "{}", "-".repeat(64))?;
    for asset in &report.results {
        writeln!(
            out,
            "{:<12} {:<8} {:>5} {:>4}  {:<12} {}",
            asset.id.as_str(),
            asset.media_type.as_str(),
            format_score(asset.score),
            asset.year,
            asset.source,
            asset.title
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{} of {} assets", report.matched, report.total)?;
    Ok(())
}

fn write_filters(filters: &ActiveFilters, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    if !filters.active {
        writeln!(out, "Active filters: none")?;
        return Ok(());
    }
    writeln!(out, "Active filters:")?;
    for chip in &filters.chips {
        writeln!(out, "  {}", chip.label)?;
    }
    Ok(())
}

fn write_stats(stats: &ResultStats, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    let by_type: Vec<String> = stats.type_counts.iter().map(|(t, n)| format!("{t} {n}")).collect();
    writeln!(out, "By type: {}", by_type.join(", "))?;
    writeln!(out, "Average score: {}", stats.average_score)?;
    if stats.top_entities.is_empty() {
        writeln!(out, "Entities: none")?;
    } else {
        let entities: Vec<String> =
            stats.top_entities.iter().map(|e| format!("{} ({})", e.entity, e.count)).collect();
        writeln!(out, "Entities: {}", entities.join(", "))?;
    }
    Ok(())
}

fn write_vocabulary(vocabulary: &Vocabulary, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    let sections = [
        ("Tags", &vocabulary.tags),
        ("Entities", &vocabulary.entities),
        ("Sources", &vocabulary.sources),
        ("Colors", &vocabulary.colors),
    ];
    for (name, values) in sections {
        writeln!(out, "{name}: {}", values.join(", "))?;
    }
    Ok(())
}

/// Whole scores print without a fractional part.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 { format!("{score:.0}") } else { format!("{score:.1}") }
}
