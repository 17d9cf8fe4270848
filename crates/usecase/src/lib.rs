//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port adapters
//! to implement specific use cases:
//!
//! - [`catalog`]: Loading and validating the asset catalog
//! - [`session`]: The single filter state, its transitions and memoized results
//! - [`evaluate`]: Sequential or thread-pooled catalog evaluation
//! - [`smart_search`]: Natural-language search through a parser port
//! - [`dto`]: Conversions at the port boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod dto;
pub mod evaluate;
pub mod session;
pub mod smart_search;

pub use catalog::LoadCatalog;
pub use evaluate::Evaluator;
pub use session::FilterSession;
pub use smart_search::{SearchOutcome, SmartSearch};
