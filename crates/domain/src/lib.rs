//! # Domain
//!
//! Pure filtering logic over an immutable asset catalog.
//!
//! - [`model`]: the [`Asset`](model::Asset) record
//! - [`filter`]: [`FilterState`](filter::FilterState) and its facet toggles
//! - [`predicate`]: the gate-by-gate match function
//! - [`merge`]: folding a parsed natural-language query into a state
//! - [`summary`]: active-filter chips and their removal
//! - [`analytics`]: statistics over a result set
//! - [`vocabulary`]: known facet values derived from a catalog
//!
//! Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod filter;
pub mod merge;
pub mod model;
pub mod predicate;
pub mod summary;
pub mod vocabulary;

pub use facet_filter_shared_kernel::{AssetId, MediaType};
