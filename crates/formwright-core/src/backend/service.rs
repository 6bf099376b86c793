//! FormBuilderService -- answers one gateway request with the model's text.

use tracing::{Instrument, debug, info_span};

use formwright_types::config::ProviderSettings;
use formwright_types::gateway::GatewayRequest;
use formwright_types::llm::{CompletionRequest, LlmError, Message, MessageRole};

use crate::llm::BoxLlmProvider;

use super::prompt::SYSTEM_PROMPT;

/// Model parameters applied to every completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        (&ProviderSettings::default()).into()
    }
}

impl From<&ProviderSettings> for CompletionSettings {
    fn from(settings: &ProviderSettings) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RespondError {
    #[error("Message is required")]
    MissingMessage,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Builds completion requests from gateway requests and sends them through
/// the configured provider.
pub struct FormBuilderService {
    provider: BoxLlmProvider,
    settings: CompletionSettings,
}

impl FormBuilderService {
    pub fn new(provider: BoxLlmProvider, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Produce the assistant text for one conversation step.
    ///
    /// The reply is the model's text with surrounding whitespace removed.
    /// Whether it is a schema is the client's business.
    #[tracing::instrument(
        name = "respond",
        skip(self, request),
        fields(provider = self.provider.name(), history_len = request.history.len())
    )]
    pub async fn respond(&self, request: &GatewayRequest) -> Result<String, RespondError> {
        if request.message.trim().is_empty() {
            return Err(RespondError::MissingMessage);
        }

        let completion = self.build_request(request);
        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = completion.max_tokens,
            gen_ai.request.temperature = ?completion.temperature,
        );

        let response = self.provider.complete(&completion).instrument(span).await?;
        debug!(
            model = %response.model,
            finish_reason = ?response.finish_reason,
            chars = response.content.len(),
            "Completion received"
        );

        Ok(response.content.trim().to_string())
    }

    /// System prompt, then every history turn in order, then the new message.
    pub fn build_request(&self, request: &GatewayRequest) -> CompletionRequest {
        let mut messages: Vec<Message> = request
            .history
            .iter()
            .map(|turn| Message {
                role: turn.role.into(),
                content: turn.content.clone(),
            })
            .collect();
        messages.push(Message {
            role: MessageRole::User,
            content: request.message.clone(),
        });

        CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }
}
