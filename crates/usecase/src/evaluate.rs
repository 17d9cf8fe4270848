use facet_filter_domain::{filter::FilterState, model::Asset, predicate};
#[cfg(feature = "parallel")]
use facet_filter_shared_kernel::{InfrastructureError, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Catalogs smaller than this are always evaluated on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 2048;

/// Runs the predicate over a whole catalog.
///
/// Output is the ascending list of matching catalog positions regardless of
/// whether evaluation ran on a thread pool.
#[derive(Debug, Default)]
pub struct Evaluator {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Evaluator {
    pub fn sequential() -> Self {
        Self::default()
    }

    /// 並列評価用のスレッドプールを構築する
    #[cfg(feature = "parallel")]
    pub fn parallel(jobs: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.max(1))
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation {
                details: e.to_string(),
            })?;
        Ok(Self { pool: Some(pool) })
    }

    pub fn is_parallel(&self) -> bool {
        #[cfg(feature = "parallel")]
        {
            self.pool.is_some()
        }
        #[cfg(not(feature = "parallel"))]
        {
            false
        }
    }

    pub fn evaluate(&self, catalog: &[Asset], state: &FilterState) -> Vec<usize> {
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            if catalog.len() >= PARALLEL_THRESHOLD {
                return pool.install(|| evaluate_parallel(catalog, state));
            }
        }
        predicate::matching_indices(catalog, state)
    }
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(catalog: &[Asset], state: &FilterState) -> Vec<usize> {
    catalog
        .par_iter()
        .enumerate()
        .filter_map(|(i, asset)| predicate::matches(asset, state).then_some(i))
        .collect()
}
