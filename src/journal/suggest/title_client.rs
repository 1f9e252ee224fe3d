//! Generative title suggestion for memory stories.
//!
//! Behaviour:
//! - No credential configured: return a fixed fallback immediately, without
//!   touching the network.
//! - Otherwise issue exactly one `generateContent` request (no retries) and
//!   clean the returned text.
//! - Any failure degrades to a fixed fallback; this surface never errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::journal::core::config::SuggestionConfig;
use crate::journal::core::errors::{JournalError, JournalResult};

/// Fallback title when no API credential is configured.
pub const NO_CREDENTIAL_FALLBACK: &str = "Beautiful Memory";
/// Fallback title when the model answers with an empty text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "A Day to Remember";
/// Fallback title when the request fails in any way.
pub const ERROR_FALLBACK: &str = "A Cherished Moment";

/// HTTP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Quotation characters stripped from the ends of a suggested title.
const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Suggestion seam: implementations must never fail outward.
#[async_trait]
pub trait TitleSuggester: Send + Sync {
    /// Suggest a title for the given story text.
    ///
    /// Always returns a non-empty string; unavailability and failures are
    /// rendered as fixed fallback titles.
    async fn suggest_title(&self, story: &str) -> String;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the hosted generative text API.
pub struct GeminiTitleClient {
    client: Client,
    config: SuggestionConfig,
}

impl GeminiTitleClient {
    /// Build a client from the suggestion configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SuggestionConfig) -> JournalResult<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    /// Whether a credential is configured and requests will be attempted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// One request, one response; callers map failures to fallbacks.
    async fn request_title(&self, api_key: &str, story: &str) -> JournalResult<String> {
        let prompt = build_prompt(story);
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JournalError::ApiStatus(status.as_u16()));
        }

        let body: GenerateResponse = response.json().await?;
        extract_text(&body).ok_or(JournalError::MalformedResponse)
    }
}

#[async_trait]
impl TitleSuggester for GeminiTitleClient {
    async fn suggest_title(&self, story: &str) -> String {
        let Some(api_key) = self.config.api_key.clone() else {
            return NO_CREDENTIAL_FALLBACK.to_string();
        };

        match self.request_title(&api_key, story).await {
            Ok(raw) => {
                let title = clean_title(&raw);
                if title.is_empty() {
                    debug!("model returned an empty title, using fallback");
                    EMPTY_RESPONSE_FALLBACK.to_string()
                } else {
                    title
                }
            }
            Err(err) => {
                warn!("title suggestion failed: {err}");
                ERROR_FALLBACK.to_string()
            }
        }
    }
}

/// Fixed prompt template embedding the story.
fn build_prompt(story: &str) -> String {
    format!(
        "Based on the following romantic memory, suggest one short, beautiful, \
         and poetic title (less than 6 words). Only return the title itself, \
         with no quotation marks or extra text.\n\nMemory: \"{story}\""
    )
}

/// Concatenate the text parts of the first candidate, if any.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.as_ref()?.first()?;
    let parts = candidate.content.as_ref()?.parts.as_ref()?;

    let mut out = String::new();
    for part in parts {
        if let Some(text) = &part.text {
            out.push_str(text);
        }
    }
    Some(out)
}

/// Strip surrounding quotation characters and whitespace.
fn clean_title(raw: &str) -> String {
    let mut cleaned = raw.trim();
    loop {
        let stripped = cleaned
            .trim_matches(QUOTE_CHARS)
            .trim();
        if stripped == cleaned {
            break;
        }
        cleaned = stripped;
    }
    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> GeminiTitleClient {
        GeminiTitleClient::new(SuggestionConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_no_credential_returns_fixed_fallback() {
        let client = offline_client();
        assert!(!client.is_enabled());

        let empty = client.suggest_title("").await;
        let beach = client
            .suggest_title("A walk on the beach at sunset")
            .await;

        assert!(!empty.is_empty());
        assert_eq!(empty, beach);
        assert_eq!(empty, NO_CREDENTIAL_FALLBACK);
    }

    #[tokio::test]
    async fn test_request_error_returns_error_fallback() {
        let config = SuggestionConfig {
            api_key: Some("test-key".to_string()),
            // Unroutable per RFC 5737, so the single attempt fails fast.
            base_url: "http://192.0.2.1:1".to_string(),
            timeout_seconds: 1,
            ..SuggestionConfig::default()
        };
        let client = GeminiTitleClient::new(config).unwrap();

        let title = client.suggest_title("We watched the sunset.").await;
        assert_eq!(title, ERROR_FALLBACK);
    }

    #[test]
    fn test_fallbacks_are_distinct_and_non_empty() {
        let all = [NO_CREDENTIAL_FALLBACK, EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK];
        for title in all {
            assert!(!title.trim().is_empty());
        }
        assert_ne!(NO_CREDENTIAL_FALLBACK, EMPTY_RESPONSE_FALLBACK);
        assert_ne!(NO_CREDENTIAL_FALLBACK, ERROR_FALLBACK);
        assert_ne!(EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK);
    }

    #[test]
    fn test_clean_title_strips_quotes_and_whitespace() {
        assert_eq!(clean_title("  \"A Day at the Shore\"  "), "A Day at the Shore");
        assert_eq!(clean_title("'Golden Hour'"), "Golden Hour");
        assert_eq!(clean_title("\u{201c}First Light\u{201d}"), "First Light");
        assert_eq!(clean_title(" \" 'Nested' \" "), "Nested");
        assert_eq!(clean_title("Untouched Title"), "Untouched Title");
    }

    #[test]
    fn test_clean_title_empty_inputs() {
        assert_eq!(clean_title(""), "");
        assert_eq!(clean_title("  \"\"  "), "");
        assert_eq!(clean_title("   "), "");
    }

    #[test]
    fn test_prompt_embeds_story() {
        let prompt = build_prompt("We watched the sunset.");
        assert!(prompt.contains("Memory: \"We watched the sunset.\""));
        assert!(prompt.contains("less than 6 words"));
    }

    #[test]
    fn test_extract_text_from_candidates() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Sunset "}, {"text": "Promise"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_text(&response).as_deref(), Some("Sunset Promise"));
    }

    #[test]
    fn test_extract_text_missing_candidates_is_none() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(&response).is_none());
    }
}
