pub mod gemini_provider;
pub mod types;

pub use types::*;

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::shared::config::GeminiConfig;
use gemini_provider::GeminiProvider;

static LLM_PROVIDER: OnceCell<Arc<dyn LlmProvider>> = OnceCell::new();

/// Инициализация провайдера из конфигурации (один раз при старте)
pub fn initialize_provider(config: &GeminiConfig) -> anyhow::Result<()> {
    let provider = GeminiProvider::new(
        config.api_base.clone(),
        config.model.clone(),
        config.api_key.clone(),
    );
    tracing::info!(
        "LLM provider: {} (model {})",
        provider.provider_name(),
        config.model
    );
    LLM_PROVIDER
        .set(Arc::new(provider))
        .map_err(|_| anyhow::anyhow!("LLM provider already initialized"))
}

pub fn get_provider() -> Result<Arc<dyn LlmProvider>, LlmError> {
    LLM_PROVIDER.get().cloned().ok_or(LlmError::NotInitialized)
}
