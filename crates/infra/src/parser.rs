// crates/infra/src/parser.rs
//! Adapters for the natural-language query parser port.

pub mod decode;
pub mod file;
pub mod gemini;

pub use decode::decode_parsed_query;
pub use file::FileQueryParser;
pub use gemini::{GeminiQueryParser, ParserConfig};
