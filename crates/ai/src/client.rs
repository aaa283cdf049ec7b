//! Chat-completions client.
//!
//! Wraps the OpenAI-compatible `/chat/completions` endpoint using
//! [`reqwest`]. Every request carries the configured timeout so a hung
//! upstream cannot hold a site request open indefinitely.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{BusinessAnalysis, GeneratedContent, TextAnalysis};
use crate::error::{ChatError, GatewayError};
use crate::{prompts, AiGateway};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Token ceiling for generated marketing copy.
const CONTENT_MAX_TOKENS: u32 = 1000;

/// Connection settings for the hosted model.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl AiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// HTTP client for the hosted chat-completions API.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: AiConfig,
}

impl OpenAiClient {
    pub fn new(config: AiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn request<'a>(&'a self, system: &'a str, user: &'a str, json_reply: bool) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: json_reply.then_some(ResponseFormat {
                kind: "json_object",
            }),
            max_tokens: None,
        }
    }

    /// Send one chat request and return the first choice's content.
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<Option<String>, ChatError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::MalformedResponse("no choices returned".into()))?;
        Ok(first.message.content)
    }

    /// Send a request that asked for a JSON object and parse the reply.
    async fn complete_json(&self, request: &ChatRequest<'_>) -> Result<Value, ChatError> {
        let content = self.complete(request).await?;
        serde_json::from_str(content.as_deref().unwrap_or("{}"))
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl AiGateway for OpenAiClient {
    async fn analyze_text(&self, text: &str) -> Result<TextAnalysis, GatewayError> {
        let request = self.request(prompts::TEXT_ANALYSIS, text, true);
        let reply = self
            .complete_json(&request)
            .await
            .map_err(|e| GatewayError::new("analyze text", e))?;
        Ok(TextAnalysis::from_reply(&reply))
    }

    async fn generate_content(&self, prompt: &str) -> Result<GeneratedContent, GatewayError> {
        let mut request = self.request(prompts::CONTENT_GENERATION, prompt, false);
        request.max_tokens = Some(CONTENT_MAX_TOKENS);
        let content = self
            .complete(&request)
            .await
            .map_err(|e| GatewayError::new("generate content", e))?;
        Ok(GeneratedContent::from_reply(content))
    }

    async fn analyze_business(&self, description: &str) -> Result<BusinessAnalysis, GatewayError> {
        let scenario = prompts::business_scenario(description);
        let request = self.request(prompts::BUSINESS_ANALYSIS, &scenario, true);
        let reply = self
            .complete_json(&request)
            .await
            .map_err(|e| GatewayError::new("analyze business scenario", e))?;
        Ok(BusinessAnalysis::from_reply(&reply))
    }
}
