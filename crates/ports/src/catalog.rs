// crates/ports/src/catalog.rs
use facet_filter_shared_kernel::{MediaType, Result};
use serde::{Deserialize, Serialize};

/// DTO representing one catalog entry as stored by a catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    pub source: String,
    pub score: f64,
    pub year: i32,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_size: f64,
    #[serde(default)]
    pub color: String,
}

/// Port for loading the asset catalog.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<AssetRecord>>;
}
