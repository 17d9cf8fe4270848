// src/config.rs
use std::path::PathBuf;

use facet_filter_domain::MediaType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Jsonl,
}

/// Facet selections given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterFlags {
    pub query: Option<String>,
    pub tags: Vec<String>,
    pub excluded_tags: Vec<String>,
    pub entities: Vec<String>,
    pub excluded_entities: Vec<String>,
    pub media_types: Vec<MediaType>,
    pub sources: Vec<String>,
    pub colors: Vec<String>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub catalog: PathBuf,
    pub filters: FilterFlags,
    pub asks: Vec<String>,
    pub parsed: Vec<PathBuf>,
    pub format: OutputFormat,
    pub chips: bool,
    pub stats: bool,
    pub top_entities: Option<usize>,
    pub vocabulary: bool,
    pub facet_search: Option<String>,
    pub jobs: usize,
    pub verbose: bool,
}
