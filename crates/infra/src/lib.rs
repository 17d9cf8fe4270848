// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod parser;
pub mod persistence;

pub use catalog::{CatalogFormat, JsonCatalogSource};
pub use parser::{FileQueryParser, GeminiQueryParser, ParserConfig, decode_parsed_query};
