// crates/infra/src/parser/file.rs
use std::path::PathBuf;

use facet_filter_ports::query_parser::{ParsedQuery, QueryParser};
use facet_filter_shared_kernel::Result;

use super::decode::decode_parsed_query;
use crate::persistence::FileReader;

/// Replays a recorded parser response; every input maps to the same file.
#[derive(Debug, Clone)]
pub struct FileQueryParser {
    path: PathBuf,
}

impl FileQueryParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QueryParser for FileQueryParser {
    fn parse(&self, text: &str) -> Result<Option<ParsedQuery>> {
        let raw = FileReader::read_to_string(&self.path)?;
        tracing::debug!(path = %self.path.display(), query = text, "replaying recorded parser response");
        Ok(decode_parsed_query(&raw))
    }
}
