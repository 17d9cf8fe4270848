//! Known facet values, used to build facet pickers and parser prompts.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::Asset;

/// Sorted, duplicate-free lists of the values seen in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub tags: Vec<String>,
    pub entities: Vec<String>,
    pub sources: Vec<String>,
    pub colors: Vec<String>,
}

impl Vocabulary {
    pub fn from_catalog(catalog: &[Asset]) -> Self {
        let mut tags = BTreeSet::new();
        let mut entities = BTreeSet::new();
        let mut sources = BTreeSet::new();
        let mut colors = BTreeSet::new();

        for asset in catalog {
            tags.extend(asset.tags.iter().cloned());
            entities.extend(asset.entities.iter().cloned());
            sources.insert(asset.source.clone());
            colors.insert(asset.color.clone());
        }

        Self {
            tags: non_empty(tags),
            entities: non_empty(entities),
            sources: non_empty(sources),
            colors: non_empty(colors),
        }
    }

    pub fn search_tags(&self, query: &str) -> Vec<&str> {
        search(&self.tags, query)
    }

    pub fn search_entities(&self, query: &str) -> Vec<&str> {
        search(&self.entities, query)
    }

    /// Keeps only the tags and entities matching `query`, as a facet picker
    /// narrows its options. Sources and colors are left as they are.
    #[must_use]
    pub fn narrowed(&self, query: &str) -> Self {
        let owned = |values: Vec<&str>| -> Vec<String> { values.into_iter().map(str::to_string).collect() };
        Self {
            tags: owned(self.search_tags(query)),
            entities: owned(self.search_entities(query)),
            sources: self.sources.clone(),
            colors: self.colors.clone(),
        }
    }
}

fn non_empty(values: BTreeSet<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}

/// Case-insensitive substring search; an empty query returns everything.
fn search<'a>(values: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    values
        .iter()
        .filter(|v| v.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
