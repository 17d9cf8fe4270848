use std::sync::Arc;

use facet_filter_domain::{filter::SCORE_MAX, filter::SCORE_MIN, model::Asset};
use facet_filter_ports::catalog::CatalogSource;
use facet_filter_shared_kernel::{ApplicationError, Result};

use crate::dto::record_to_asset;

/// Loads the catalog once; the result is shared read-only for the process lifetime.
pub struct LoadCatalog<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> LoadCatalog<'a> {
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Arc<[Asset]>> {
        let records = self.source.load().map_err(|e| ApplicationError::CatalogLoadFailed {
            reason: "catalog source failed".to_string(),
            source: Some(Box::new(e)),
        })?;

        let assets: Vec<Asset> = records.into_iter().map(record_to_asset).collect();
        let out_of_range = assets
            .iter()
            .filter(|a| !(SCORE_MIN..=SCORE_MAX).contains(&a.score))
            .count();
        if out_of_range > 0 {
            tracing::warn!(out_of_range, "catalog contains scores outside 0..=100");
        }
        tracing::debug!(assets = assets.len(), "catalog loaded");

        Ok(assets.into())
    }
}
