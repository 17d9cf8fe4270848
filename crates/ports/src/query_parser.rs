// crates/ports/src/query_parser.rs
use facet_filter_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Structured output of a natural-language query parser.
///
/// Every field is optional: an absent key implies no constraint. Unknown keys
/// are ignored when deserializing. Media types are kept as raw strings so that
/// one unrecognised value does not invalidate the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_year: Option<f64>,
}

/// Port for translating natural-language text into a [`ParsedQuery`].
///
/// `Ok(None)` means the parser produced nothing usable; callers treat it the
/// same as a failure and leave their state untouched.
pub trait QueryParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Option<ParsedQuery>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_extra_keys_are_tolerated() {
        let json = r#"{"tags":["neon"],"confidence":0.9,"maxScore":null}"#;
        let parsed: ParsedQuery = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tags, Some(vec!["neon".to_string()]));
        assert_eq!(parsed.max_score, None);
        assert_eq!(parsed.search_query, None);
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        assert!(serde_json::from_str::<ParsedQuery>(r#"{"tags":"neon"}"#).is_err());
        assert!(serde_json::from_str::<ParsedQuery>(r#"{"minScore":"high"}"#).is_err());
    }
}
