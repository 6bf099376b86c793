//! Configuration loader for Formwright.
//!
//! Reads `config.toml` from the config directory (`~/.formwright/` by
//! default) and deserializes it into [`FormwrightConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use formwright_types::config::{FormwrightConfig, ProviderSettings};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "FORMWRIGHT_HOME";

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{config_dir}/config.toml`.
///
/// - Missing file: defaults, logged at debug.
/// - Unreadable or malformed file: defaults, logged as a warning.
pub async fn load_config(config_dir: &Path) -> FormwrightConfig {
    let config_path = config_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return FormwrightConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return FormwrightConfig::default();
        }
    };

    match toml::from_str::<FormwrightConfig>(&content) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded configuration");
            config
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            FormwrightConfig::default()
        }
    }
}

/// Resolve the config directory.
///
/// Priority: `FORMWRIGHT_HOME`, then `~/.formwright`, then `./.formwright`.
pub fn resolve_config_dir() -> PathBuf {
    config_dir_from(std::env::var(CONFIG_DIR_ENV).ok(), dirs::home_dir())
}

fn config_dir_from(env_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".formwright");
    }

    PathBuf::from(".formwright")
}

/// Read the provider API key from the environment variable named in the
/// settings. Unset, non-Unicode and blank values all count as absent.
pub fn resolve_api_key(settings: &ProviderSettings) -> Option<SecretString> {
    std::env::var(&settings.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .map(SecretString::from)
}
