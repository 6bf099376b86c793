//! LlmProvider trait definition.

use formwright_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Implementations
/// live in formwright-infra (`OpenAiCompatibleProvider`, `MockFormProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai_compatible", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
