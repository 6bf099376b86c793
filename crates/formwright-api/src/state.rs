//! Application state shared by the HTTP handlers.

use std::sync::Arc;

use formwright_core::backend::{CompletionSettings, FormBuilderService};
use formwright_infra::config::resolve_api_key;
use formwright_infra::llm::create_provider;
use formwright_types::config::ProviderSettings;

#[derive(Clone)]
pub struct AppState {
    pub form_builder: Arc<FormBuilderService>,
}

impl AppState {
    /// Pick the provider from settings and environment, then wire the service.
    pub fn init(settings: &ProviderSettings, force_mock: bool) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(settings);
        let provider = create_provider(settings, api_key, force_mock)?;
        Ok(Self::new(FormBuilderService::new(
            provider,
            CompletionSettings::from(settings),
        )))
    }

    pub fn new(form_builder: FormBuilderService) -> Self {
        Self {
            form_builder: Arc::new(form_builder),
        }
    }
}
