//! LLM provider implementations

mod error;
mod gemini;

pub use error::LlmError;
pub use gemini::{generate_content, GeminiProvider};

use async_trait::async_trait;

/// Trait for one-shot text generation backends
///
/// Each call is independent: no conversation history is carried between
/// prompts.
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Send a single prompt and return the answer text
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
