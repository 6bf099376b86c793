//! Configuration types for Formwright.
//!
//! `FormwrightConfig` mirrors `config.toml` in the Formwright home directory.
//! Every section and field has a default, so an empty or partial file is valid.

use serde::{Deserialize, Serialize};

use crate::llm::ProviderKind;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormwrightConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Where the chat client sends its requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Transport timeout; expiry surfaces as a gateway failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://localhost:5001/chat".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Bind address of the gateway server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// LLM provider used by the gateway server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_provider_kind")]
    pub kind: ProviderKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_provider_kind() -> ProviderKind {
    ProviderKind::OpenAiCompatible
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.1
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FormwrightConfig::default();
        assert_eq!(config.gateway.endpoint, "http://localhost:5001/chat");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.provider.model, "gpt-3.5-turbo");
        assert_eq!(config.provider.max_tokens, 1500);
        assert_eq!(config.provider.kind, ProviderKind::OpenAiCompatible);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: FormwrightConfig = toml::from_str("").unwrap();
        assert_eq!(config, FormwrightConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_remaining_defaults() {
        let config: FormwrightConfig = toml::from_str(
            r#"
[server]
port = 8080

[provider]
kind = "mock"
model = "gpt-4o-mini"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.provider.kind, ProviderKind::Mock);
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.temperature, 0.1);
        assert_eq!(config.gateway.timeout_secs, 120);
    }
}
