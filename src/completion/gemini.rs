//! Gemini client implementation using the generateContent API.
//!
//! Wire format follows Google's v1beta REST surface:
//! - POST `{base}/v1beta/models/{model}:generateContent`
//! - `x-goog-api-key` header for authentication
//! - One user content per request; no conversation history is sent

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::completion::client::{CompletionClient, CompletionError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Fixed sampling temperature for every request.
const TEMPERATURE: f32 = 0.5;

// ============================================================================
// Gemini generateContent API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Error body shape: `{"error": {"code": ..., "message": ..., "status": ...}}`
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: String,
}

fn build_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
        },
    }
}

/// Concatenates the first candidate's parts. None if there is no candidate
/// or the joined text is empty.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Gemini API client (hosted generateContent endpoint)
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Validates the credentials and constructs the client.
    /// A failure here is fatal at startup, like a config load failure.
    pub fn try_new(
        api_key: String,
        base_url: Option<String>,
        model: String,
    ) -> Result<Self, CompletionError> {
        if api_key.trim().is_empty() {
            return Err(CompletionError::InvalidConfig(
                "API key must not be empty".to_string(),
            ));
        }

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        reqwest::Url::parse(&base_url)
            .map_err(|e| CompletionError::InvalidConfig(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = build_request(prompt);

        info!(
            "Gemini request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // Prefer the structured error message; fall back to the raw body
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            warn!("Gemini API error: {} - {}", status, message);
            return Err(CompletionError::Api { status, message });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let text = extract_text(body).ok_or_else(|| {
            warn!("Gemini response contained no candidate text");
            CompletionError::MalformedResponse("no candidate text in response".to_string())
        })?;

        info!("Gemini response: {} bytes", text.len());
        Ok(text)
    }
}
