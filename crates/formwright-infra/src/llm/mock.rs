//! MockFormProvider -- canned replies for running without an API key.

use serde_json::json;

use formwright_core::llm::LlmProvider;
use formwright_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Always answers with the same contact-form schema, whatever was asked.
#[derive(Debug, Clone, Default)]
pub struct MockFormProvider;

impl MockFormProvider {
    pub fn new() -> Self {
        Self
    }

    /// The schema text returned for every request.
    pub fn canned_schema() -> String {
        json!({
            "title": "Contact Form",
            "fields": [
                {
                    "id": "name",
                    "type": "text",
                    "label": "Full Name",
                    "required": true,
                    "placeholder": "Enter your full name"
                },
                {
                    "id": "email",
                    "type": "email",
                    "label": "Email Address",
                    "required": true,
                    "placeholder": "Enter your email"
                },
                {
                    "id": "message",
                    "type": "textarea",
                    "label": "Message",
                    "required": true,
                    "placeholder": "Enter your message"
                }
            ]
        })
        .to_string()
    }
}

impl LlmProvider for MockFormProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tracing::debug!(messages = request.messages.len(), "Mock provider answering");
        Ok(CompletionResponse {
            content: Self::canned_schema(),
            model: "mock".to_string(),
            finish_reason: Some("stop".to_string()),
        })
    }
}
