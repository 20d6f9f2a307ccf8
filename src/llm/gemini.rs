//! Google Gemini LLM provider implementation
//!
//! SECURITY: API keys are ONLY sent to the configured Gemini endpoint.
//! The key travels in the `x-goog-api-key` header and is never logged.

use super::{LlmError, PromptGenerator};
use crate::config::GeminiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

/// Issue one `generateContent` call and return the first text part of the
/// first candidate.
///
/// An empty credential fails with [`LlmError::MissingCredential`] before any
/// client is built, so no connection is ever opened without a key.
pub async fn generate_content(
    api_key: &str,
    prompt: &str,
    config: &GeminiConfig,
) -> Result<String, LlmError> {
    if api_key.trim().is_empty() {
        return Err(LlmError::MissingCredential(config.api_key_env.clone()));
    }

    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| LlmError::ConnectionFailure(format!("failed to build HTTP client: {}", e)))?;

    let request = GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart::Text {
                text: prompt.to_string(),
            }],
        }],
        generation_config: config
            .max_output_tokens
            .map(|max_output_tokens| GeminiGenerationConfig {
                max_output_tokens: Some(max_output_tokens),
            }),
    };

    let url = format!(
        "{}/{}:generateContent",
        config.base_url.trim_end_matches('/'),
        config.model
    );

    tracing::debug!(model = %config.model, prompt_len = prompt.len(), "Sending Gemini request");

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await
        .map_err(LlmError::from_network_error)?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "Gemini API returned an error");
        return Err(LlmError::from_http_status(status, &error_text));
    }

    let body = response
        .json::<GeminiResponse>()
        .await
        .map_err(|e| LlmError::GenerationFailure(format!("failed to parse response: {}", e)))?;

    if let Some(usage) = &body.usage_metadata {
        tracing::debug!(
            prompt_tokens = usage.prompt_token_count,
            candidate_tokens = usage.candidates_token_count,
            "Gemini response received"
        );
    }

    extract_text(body)
}

/// Take the first text-typed part of the first candidate
fn extract_text(response: GeminiResponse) -> Result<String, LlmError> {
    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("no candidates returned (blocked: {})", r))
            .unwrap_or_else(|| "no candidates returned".to_string());
        LlmError::UnexpectedResponseShape(reason)
    })?;

    candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|part| match part {
            GeminiPart::Text { text } => Some(text),
            GeminiPart::Other(_) => None,
        })
        .ok_or_else(|| {
            LlmError::UnexpectedResponseShape("response is not text".to_string())
        })
}

/// Gemini-backed [`PromptGenerator`]
///
/// Reads the key from the configured environment variable on every call so
/// a key exported after startup is picked up.
pub struct GeminiProvider {
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn api_key(&self) -> String {
        env::var(&self.config.api_key_env).unwrap_or_default()
    }
}

#[async_trait]
impl PromptGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        generate_content(&self.api_key(), prompt, &self.config).await
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// A content part; anything that is not text (inline data, function calls)
/// is kept opaque
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    Other(serde_json::Value),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}
