//! Typed errors for LLM operations
//!
//! Every failure of a generation call maps to one of these variants so the
//! TUI can show a precise message instead of crashing.

use thiserror::Error;

/// LLM operation errors with typed variants
///
/// - `MissingCredential` - no API key available; no request was made
/// - `ConnectionFailure` - client could not be built or the service could not be reached
/// - `GenerationFailure` - the service answered with an error
/// - `UnexpectedResponseShape` - the answer holds no text where one is expected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    /// The credential environment variable is unset or empty
    #[error("API key not found: set the {0} environment variable")]
    MissingCredential(String),

    /// HTTP client construction or transport failure
    #[error("Connection failed: {0}")]
    ConnectionFailure(String),

    /// The remote call returned an error status or an undecodable body
    #[error("Generation failed: {0}")]
    GenerationFailure(String),

    /// The response has no text part in the first candidate
    #[error("Unexpected response: {0}")]
    UnexpectedResponseShape(String),
}

impl LlmError {
    /// Convert HTTP status code and error text into a typed LlmError
    pub fn from_http_status(status: reqwest::StatusCode, error_text: &str) -> Self {
        let detail = extract_error_message(error_text).unwrap_or_else(|| error_text.trim().to_string());
        if detail.is_empty() {
            LlmError::GenerationFailure(format!("HTTP {}", status))
        } else {
            LlmError::GenerationFailure(format!("HTTP {}: {}", status, detail))
        }
    }

    /// Convert network/connection errors into a typed LlmError
    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::ConnectionFailure(format!("request timeout: {}", e))
        } else if e.is_connect() || e.is_request() || e.is_builder() {
            LlmError::ConnectionFailure(e.to_string())
        } else if let Some(status) = e.status() {
            Self::from_http_status(status, &e.to_string())
        } else {
            LlmError::GenerationFailure(e.to_string())
        }
    }

    /// Check if this error means the user has to supply a key
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, LlmError::MissingCredential(_))
    }
}

/// Pull `error.message` out of a Google API error body
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(|s| s.to_string())
}
