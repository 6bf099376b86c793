//! OpenAiCompatibleProvider -- [`LlmProvider`] for any OpenAI-style
//! chat-completions API.
//!
//! Posts to `{base_url}/chat/completions` with bearer authentication. The
//! API key is wrapped in [`SecretString`] and is only exposed when building
//! the `Authorization` header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use formwright_core::llm::LlmProvider;
use formwright_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole};

/// Connection settings for an OpenAI-compatible endpoint.
pub struct OpenAiCompatConfig {
    /// Name reported in logs (e.g. "openai_compatible").
    pub provider_name: String,
    /// API root, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub api_key: SecretString,
    /// Used when a request does not name a model.
    pub model: String,
}

/// Does not derive Debug so the client state never ends up in logs.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    provider_name: String,
    base_url: String,
    api_key: SecretString,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: MessageRole,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatibleProvider {
    const TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(config: OpenAiCompatConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            provider_name: config.provider_name,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// System prompt first, then the conversation in order.
    fn to_wire<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionBody<'a> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(WireMessage {
                role: MessageRole::System,
                content: system,
            });
        }
        messages.extend(request.messages.iter().map(|m| WireMessage {
            role: m.role,
            content: &m.content,
        }));

        let model = if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        };

        ChatCompletionBody {
            model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire(request);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let reply: ChatCompletionReply = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        let choice = reply.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            model: reply.model.unwrap_or_else(|| body.model.to_string()),
            finish_reason: choice.finish_reason,
        })
    }
}
