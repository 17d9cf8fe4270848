use facet_filter_domain::merge::QueryConstraints;
use facet_filter_ports::query_parser::QueryParser;
use facet_filter_shared_kernel::{ApplicationError, ApplicationResult};

use crate::{dto::parsed_to_constraints, session::FilterSession};

/// What a natural-language search did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The parsed constraints were merged.
    Applied(QueryConstraints),
    /// Blank input; the parser was not called.
    Skipped,
    /// The parser failed or returned nothing usable; state is unchanged.
    NoResult,
}

/// Natural-language search over a [`QueryParser`] port.
///
/// Parser failures never reach the caller as errors. The only error is
/// running a search while the feature is disabled.
pub struct SmartSearch<'a> {
    parser: Option<&'a dyn QueryParser>,
}

impl<'a> SmartSearch<'a> {
    pub fn new(parser: &'a dyn QueryParser) -> Self {
        Self { parser: Some(parser) }
    }

    /// No parser is configured (for example, missing credentials).
    pub fn disabled() -> Self {
        Self { parser: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.parser.is_some()
    }

    /// Parses `text` without touching any session. `Ok(None)` for blank input
    /// or a failed parse.
    pub fn resolve(&self, text: &str) -> ApplicationResult<Option<QueryConstraints>> {
        let parser = self.parser.ok_or_else(|| ApplicationError::SmartSearchDisabled {
            reason: "no query parser configured".to_string(),
        })?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        match parser.parse(text) {
            Ok(Some(parsed)) => Ok(Some(parsed_to_constraints(parsed))),
            Ok(None) => {
                tracing::warn!(query = text, "query parser returned no usable result");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(query = text, "query parser failed: {e}");
                Ok(None)
            }
        }
    }

    /// Parses `text` and merges the result into `session`.
    ///
    /// Results are applied as they arrive; there is no de-duplication.
    pub fn run(&self, text: &str, session: &mut FilterSession) -> ApplicationResult<SearchOutcome> {
        if self.parser.is_some() && text.trim().is_empty() {
            return Ok(SearchOutcome::Skipped);
        }
        match self.resolve(text)? {
            Some(constraints) => {
                session.merge(&constraints);
                tracing::debug!(?constraints, "natural-language query merged");
                Ok(SearchOutcome::Applied(constraints))
            }
            None => Ok(SearchOutcome::NoResult),
        }
    }
}
