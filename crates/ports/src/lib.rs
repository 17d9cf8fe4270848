//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`catalog`]: Loading the read-only asset catalog
//! - [`query_parser`]: Translating natural-language text into facet constraints
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod query_parser;
