// crates/infra/src/parser/gemini.rs
use std::{fmt, time::Duration};

use facet_filter_domain::{
    MediaType,
    filter::{DEFAULT_YEAR_RANGE, FULL_SCORE_RANGE},
    vocabulary::Vocabulary,
};
use facet_filter_ports::query_parser::{ParsedQuery, QueryParser};
use facet_filter_shared_kernel::{InfraResult, InfrastructureError, Result};
use serde::Deserialize;
use serde_json::{Value, json};

use super::decode::decode_parsed_query;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Gemini parser.
#[derive(Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ParserConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Reads the process environment. `None` when no API key is set, which
    /// disables natural-language search.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let present = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = present("GEMINI_API_KEY").or_else(|| present("API_KEY"))?;
        let mut config = Self::new(api_key);
        if let Some(model) = present("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = present("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = present("GEMINI_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid GEMINI_TIMEOUT_SECS"),
            }
        }
        Some(config)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url.trim_end_matches('/'), self.model)
    }
}

/// [`QueryParser`] backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiQueryParser {
    config: ParserConfig,
    client: reqwest::blocking::Client,
    instruction: String,
}

impl GeminiQueryParser {
    /// The prompt lists `vocabulary` so the model picks existing facet values.
    pub fn new(config: ParserConfig, vocabulary: &Vocabulary) -> InfraResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::HttpRequest {
                endpoint: config.endpoint(),
                details: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            instruction: system_instruction(vocabulary),
            config,
            client,
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn request_body(&self, text: &str) -> Value {
        json!({
            "systemInstruction": { "parts": [{ "text": self.instruction }] },
            "contents": [{ "role": "user", "parts": [{ "text": text }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        })
    }
}

impl QueryParser for GeminiQueryParser {
    fn parse(&self, text: &str) -> Result<Option<ParsedQuery>> {
        let endpoint = self.config.endpoint();
        tracing::debug!(%endpoint, model = %self.config.model, "sending query to Gemini");

        let http_error = |details: String| InfrastructureError::HttpRequest { endpoint: endpoint.clone(), details };

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.request_body(text))
            .send()
            .map_err(|e| http_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(http_error(format!("{status}: {}", body.trim())).into());
        }

        let payload: GenerateContentResponse = match response.json() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("undecodable Gemini response: {e}");
                return Ok(None);
            }
        };
        let Some(raw) = payload.text() else {
            tracing::warn!("Gemini returned no text candidate");
            return Ok(None);
        };
        Ok(decode_parsed_query(&raw))
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

fn system_instruction(vocabulary: &Vocabulary) -> String {
    let media_types: Vec<&str> = MediaType::ALL.iter().map(|t| t.as_str()).collect();
    format!(
        "You are a search query parser for a digital asset management system.\n\
         Translate the user's request into a JSON object that matches the filtering capabilities below.\n\
         \n\
         Available metadata:\n\
         - Tags: {tags}\n\
         - Entities: {entities}\n\
         - Sources: {sources}\n\
         - Media types: {media_types}\n\
         - Years: {year_lo}-{year_hi}\n\
         - Score: {score_lo}-{score_hi}\n\
         \n\
         Instructions:\n\
         1. Put remaining keywords in 'searchQuery'.\n\
         2. Identify tags mentioned explicitly or implicitly.\n\
         3. Identify entities mentioned (people, brands, organisations).\n\
         4. Identify sources mentioned (e.g. \"from Reddit\").\n\
         5. Identify media types (e.g. \"show me videos\").\n\
         6. Identify numeric ranges for year or score (\"high quality\" implies minScore 80, \"recent\" implies minYear {recent}).\n\
         \n\
         Return strictly a JSON object.",
        tags = vocabulary.tags.join(", "),
        entities = vocabulary.entities.join(", "),
        sources = vocabulary.sources.join(", "),
        media_types = media_types.join(", "),
        year_lo = DEFAULT_YEAR_RANGE.lo,
        year_hi = DEFAULT_YEAR_RANGE.hi,
        score_lo = FULL_SCORE_RANGE.lo,
        score_hi = FULL_SCORE_RANGE.hi,
        recent = DEFAULT_YEAR_RANGE.hi - 1,
    )
}

fn response_schema() -> Value {
    let strings = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    let media_types: Vec<&str> = MediaType::ALL.iter().map(|t| t.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "searchQuery": { "type": "STRING" },
            "tags": strings,
            "entities": strings,
            "sources": strings,
            "mediaTypes": { "type": "ARRAY", "items": { "type": "STRING", "enum": media_types } },
            "minScore": { "type": "NUMBER" },
            "maxScore": { "type": "NUMBER" },
            "minYear": { "type": "NUMBER" },
            "maxYear": { "type": "NUMBER" },
        },
    })
}
