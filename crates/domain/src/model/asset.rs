use facet_filter_shared_kernel::{AssetId, MediaType};
use serde::Serialize;

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub tags: Vec<String>,
    pub entities: Vec<String>,
    pub source: String,
    /// Quality score, nominally within `0..=100`.
    pub score: f64,
    pub year: i32,
    /// Seconds; only present for timed media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Megabytes.
    pub file_size: f64,
    /// Opaque color token such as `#ef4444`.
    pub color: String,
}

impl Asset {
    pub fn builder(id: impl Into<AssetId>, media_type: MediaType) -> AssetBuilder {
        AssetBuilder::new(id, media_type)
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[inline]
    pub fn has_entity(&self, entity: &str) -> bool {
        self.entities.iter().any(|e| e == entity)
    }
}

/// Step-by-step construction of an [`Asset`], mostly for adapters and tests.
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    pub fn new(id: impl Into<AssetId>, media_type: MediaType) -> Self {
        let id = id.into();
        Self {
            asset: Asset {
                title: id.to_string(),
                id,
                description: String::new(),
                url: None,
                media_type,
                tags: Vec::new(),
                entities: Vec::new(),
                source: String::new(),
                score: 0.0,
                year: 2020,
                duration: None,
                file_size: 0.0,
                color: String::new(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.asset.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.asset.description = description.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.asset.url = Some(url.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset.tags = dedup(tags);
        self
    }

    pub fn entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset.entities = dedup(entities);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.asset.source = source.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.asset.score = score;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.asset.year = year;
        self
    }

    pub fn duration(mut self, seconds: u32) -> Self {
        self.asset.duration = Some(seconds);
        self
    }

    pub fn file_size(mut self, megabytes: f64) -> Self {
        self.asset.file_size = megabytes;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.asset.color = color.into();
        self
    }

    /// Drops any duration set on non-timed media.
    pub fn build(mut self) -> Asset {
        if !self.asset.media_type.is_timed() {
            self.asset.duration = None;
        }
        self.asset
    }
}

// タグ・エンティティは集合として扱うため重複を除去する
fn dedup<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
