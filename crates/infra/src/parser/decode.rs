// crates/infra/src/parser/decode.rs
use facet_filter_ports::query_parser::ParsedQuery;

/// Decodes raw parser output into a [`ParsedQuery`].
///
/// Returns `None` for anything that is not a JSON object or whose known keys
/// have the wrong shape. A surrounding Markdown code fence is ignored.
pub fn decode_parsed_query(raw: &str) -> Option<ParsedQuery> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("parser response is not JSON: {e}");
            return None;
        }
    };
    if !value.is_object() {
        tracing::warn!("parser response is not a JSON object");
        return None;
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("parser response does not match the query shape: {e}");
            None
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // 言語タグ (```json など) は行末まで読み飛ばす
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.trim_end().trim_end_matches("```").trim()
}
