use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

/// Sampling is pinned so the same snapshot always yields the same diagnosis.
const TEMPERATURE: f64 = 0.0;
const TOP_P: f64 = 1.0;

/// Configuration for talking to an OpenAI-compatible chat completion API.
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl OpenAiClientConfig {
    /// Loads config from env vars:
    /// - `OPENAI_API_KEY`  (required)
    /// - `OPENAI_BASE_URL` (default: `https://api.openai.com/v1/`)
    /// - `OPENAI_MODEL`    (default: `gpt-4o-mini`)
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/".to_string());
        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Ok(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// One role-tagged message of a chat prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A single-turn chat completion call.
///
/// The API server depends on this trait rather than on the concrete client so
/// handlers can be exercised against a stub.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Submits the messages and returns the model's reply text, trimmed.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Minimal chat client for an OpenAI-compatible completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: Url,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: OpenAiClientConfig) -> Result<Self> {
        // A trailing slash is required for Url::join to keep the /v1 path.
        let mut raw = config.base_url;
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url =
            Url::parse(&raw).with_context(|| format!("Invalid OPENAI_BASE_URL: {raw}"))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .context("OPENAI_API_KEY contains invalid header characters")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            model: config.model,
        })
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let endpoint = self
            .base_url
            .join("chat/completions")
            .context("Failed to build chat completions URL")?;

        let request = ChatCompletionRequest::deterministic(&self.model, messages);

        let response: ChatCompletionResponse = self
            .http
            .post(endpoint.clone())
            .json(&request)
            .send()
            .await
            .with_context(|| format!("POST {endpoint} failed"))?
            .error_for_status()
            .with_context(|| format!("POST {endpoint} returned non-success status"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {endpoint}"))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow!("Completion response had no choices"))?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    top_p: f64,
}

impl ChatCompletionRequest {
    fn deterministic(model: &str, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.to_string(),
            messages,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}
