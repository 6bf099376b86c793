//! LLM provider implementations.
//!
//! Concrete implementations of the [`LlmProvider`](formwright_core::llm::LlmProvider)
//! trait, plus a factory ([`create_provider`]) that picks one from
//! [`ProviderSettings`] and the resolved API key.

pub mod mock;
pub mod openai_compat;

use secrecy::{ExposeSecret, SecretString};

use formwright_core::llm::BoxLlmProvider;
use formwright_types::config::ProviderSettings;
use formwright_types::llm::{LlmError, ProviderKind};

use self::mock::MockFormProvider;
use self::openai_compat::{OpenAiCompatConfig, OpenAiCompatibleProvider};

/// API key value that means "no real key configured".
pub const PLACEHOLDER_API_KEY: &str = "test_key_for_now";

/// Create a [`BoxLlmProvider`] for the gateway server.
///
/// The mock provider is used when `force_mock` is set, when the settings ask
/// for it, when no API key is available, or when the key is the placeholder
/// value. Otherwise an OpenAI-compatible provider is built.
pub fn create_provider(
    settings: &ProviderSettings,
    api_key: Option<SecretString>,
    force_mock: bool,
) -> Result<BoxLlmProvider, LlmError> {
    let reason = if force_mock || settings.kind == ProviderKind::Mock {
        Some("mock provider requested")
    } else {
        match &api_key {
            None => Some("no API key found"),
            Some(key) if key.expose_secret() == PLACEHOLDER_API_KEY => {
                Some("placeholder API key configured")
            }
            Some(_) => None,
        }
    };

    if let Some(reason) = reason {
        tracing::warn!(
            reason,
            api_key_env = %settings.api_key_env,
            "Using mock responses"
        );
        return Ok(BoxLlmProvider::new(MockFormProvider::new()));
    }

    let Some(api_key) = api_key else {
        return Err(LlmError::AuthenticationFailed);
    };

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: settings.kind.to_string(),
        base_url: settings.base_url.clone(),
        api_key,
        model: settings.model.clone(),
    })?;
    tracing::info!(
        base_url = %settings.base_url,
        model = %settings.model,
        "Using OpenAI-compatible provider"
    );
    Ok(BoxLlmProvider::new(provider))
}
