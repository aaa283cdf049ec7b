//! Gateway to the hosted language model behind the "Try AI" demos.
//!
//! [`AiGateway`] is the boundary the HTTP layer depends on;
//! [`client::OpenAiClient`] implements it over the chat-completions API.
//! Replies are reshaped by [`analysis`] into fixed, clamped shapes.

pub mod analysis;
pub mod client;
pub mod error;
mod prompts;

use async_trait::async_trait;

pub use analysis::{BusinessAnalysis, GeneratedContent, TextAnalysis};
pub use client::{AiConfig, OpenAiClient};
pub use error::GatewayError;

/// Text in, reshaped model output out. One call per request, no retries.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Rate the sentiment of customer feedback.
    async fn analyze_text(&self, text: &str) -> Result<TextAnalysis, GatewayError>;

    /// Write marketing copy for a trade business.
    async fn generate_content(&self, prompt: &str) -> Result<GeneratedContent, GatewayError>;

    /// Produce insights and up to five recommendations for a business scenario.
    async fn analyze_business(&self, description: &str) -> Result<BusinessAnalysis, GatewayError>;
}
