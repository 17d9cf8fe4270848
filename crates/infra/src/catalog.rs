// crates/infra/src/catalog.rs
use std::path::{Path, PathBuf};

use facet_filter_ports::catalog::{AssetRecord, CatalogSource};
use facet_filter_shared_kernel::{ErrorContext, InfraResult, Result};

use crate::persistence::FileReader;

/// On-disk encoding of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from the file extension; anything unrecognised is JSON.
    pub fn from_path(path: &Path) -> Self {
        #[cfg(feature = "yaml")]
        {
            let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
            if matches!(ext.as_deref(), Some("yaml" | "yml")) {
                return Self::Yaml;
            }
        }
        #[cfg(not(feature = "yaml"))]
        let _ = path;
        Self::Json
    }

    /// Decodes a whole catalog (a sequence of asset records) from `text`.
    pub fn decode(self, text: &str) -> InfraResult<Vec<AssetRecord>> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Catalog stored as a single file holding an array of assets.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = CatalogFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Vec<AssetRecord>> {
        let text = FileReader::read_to_string(&self.path)?;
        let records = self
            .format
            .decode(&text)
            .with_context(|| format!("decoding catalog {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "catalog file decoded");
        Ok(records)
    }
}
