//! Discovery provider backed by Gemini's `google_search` tool.
//!
//! The agent sends a single `generateContent` request with search grounding
//! enabled, then hands the answer text and grounding citations to the pure
//! decoder in [`moodshift_core::discovery::parse_discovery`].

use std::time::Duration;

use async_trait::async_trait;
use moodshift_core::config::DiscoveryConfig;
use moodshift_core::discovery::{
    DiscoveryProvider, DiscoveryResult, SourceLink, build_prompt, parse_discovery,
};
use moodshift_core::error::{MoodshiftError, Result};
use moodshift_core::secret::SecretService;
use moodshift_core::tags::{Mood, Platform, SessionLength};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Discovery provider that calls the Gemini REST API.
#[derive(Clone)]
pub struct GeminiDiscoveryAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiDiscoveryAgent {
    /// Creates a new agent with the provided API key and discovery settings.
    pub fn new(api_key: impl Into<String>, config: &DiscoveryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MoodshiftError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Loads the API key from the secret service.
    ///
    /// A `model_name` in `secret.json` takes precedence over `config.toml`.
    pub async fn try_from_secrets(
        secrets: &dyn SecretService,
        config: &DiscoveryConfig,
    ) -> Result<Self> {
        let secret_config = secrets.load_secrets().await?;
        let api_key = secret_config.gemini_api_key().ok_or_else(|| {
            MoodshiftError::config("Gemini API key not found in secret.json or GEMINI_API_KEY")
        })?;
        let mut agent = Self::new(api_key, config)?;
        if let Some(model) = secret_config.gemini_model() {
            agent.model = model.to_string();
        }
        Ok(agent)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<Value> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            tools: vec![Tool::default()],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                let is_retryable = err.is_connect() || err.is_timeout();
                MoodshiftError::DiscoveryUnavailable {
                    message: format!("Gemini request failed: {}", err.without_url()),
                    status_code: None,
                    is_retryable,
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body));
        }

        response.json().await.map_err(|err| {
            MoodshiftError::discovery_unavailable(
                format!("Failed to parse Gemini response: {err}"),
                false,
            )
        })
    }
}

#[async_trait]
impl DiscoveryProvider for GeminiDiscoveryAgent {
    async fn discover(
        &self,
        mood: Mood,
        length: SessionLength,
        platform: Platform,
    ) -> Result<DiscoveryResult> {
        let prompt = build_prompt(mood, length, platform);
        tracing::debug!(%mood, time = %length, %platform, model = %self.model, "requesting discovery");

        let payload = self.generate(&prompt).await?;
        let text = extract_answer(&payload).unwrap_or_default();
        let citations = extract_citations(&payload);
        if text.is_empty() {
            tracing::warn!("Gemini returned no answer text, using defaults");
        }

        let result = parse_discovery(&text, citations);
        tracing::info!(name = %result.name, sources = result.sources.len(), "discovered game");
        Ok(result)
    }
}

/// Provider used when no API key is configured. Every call fails.
#[derive(Debug, Clone)]
pub struct UnconfiguredDiscovery {
    reason: String,
}

impl UnconfiguredDiscovery {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DiscoveryProvider for UnconfiguredDiscovery {
    async fn discover(
        &self,
        _mood: Mood,
        _length: SessionLength,
        _platform: Platform,
    ) -> Result<DiscoveryResult> {
        Err(MoodshiftError::discovery_unavailable(self.reason.clone(), false))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize, Default)]
struct Tool {
    #[serde(rename = "google_search")]
    google_search: GoogleSearchConfig,
}

#[derive(Serialize, Default)]
struct GoogleSearchConfig {}

fn first_candidate(root: &Value) -> Option<&Value> {
    root.get("candidates")?.as_array()?.first()
}

/// Concatenated text parts of the first candidate.
fn extract_answer(root: &Value) -> Option<String> {
    let parts = first_candidate(root)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// `groundingChunks[*].web` of the first candidate, in order.
fn extract_citations(root: &Value) -> Vec<SourceLink> {
    let Some(chunks) = first_candidate(root)
        .and_then(|candidate| candidate.get("groundingMetadata"))
        .and_then(|metadata| metadata.get("groundingChunks"))
        .and_then(|chunks| chunks.as_array())
    else {
        return Vec::new();
    };

    chunks
        .iter()
        .filter_map(|chunk| chunk.get("web"))
        .map(|web| {
            let field = |name: &str| web.get(name).and_then(|v| v.as_str()).map(str::to_string);
            SourceLink::new(field("title"), field("uri"))
        })
        .collect()
}

fn map_http_error(status: StatusCode, body: &str) -> MoodshiftError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    MoodshiftError::DiscoveryUnavailable {
        message: format!("Gemini returned {status}: {message}"),
        status_code: Some(status.as_u16()),
        is_retryable: is_retryable_status(status),
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}
