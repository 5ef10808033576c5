//! Configuration and factory defaults for OpenAI-compatible providers.

use parlance_types::llm::ProviderCapabilities;

/// Configuration for an [`super::OpenAiCompatibleProvider`].
#[derive(Debug, Clone)]
pub struct OpenAiCompatConfig {
    pub provider_name: String,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub capabilities: ProviderCapabilities,
}

/// OpenAI defaults: `https://api.openai.com/v1`.
pub fn openai_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".to_string(),
        base_url: "https://api.openai.com/v1".to_string(),
        api_key: api_key.to_string(),
        model: model.to_string(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 16_384,
        },
    }
}

/// Mistral AI defaults: `https://api.mistral.ai/v1`.
pub fn mistral_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "mistral".to_string(),
        base_url: "https://api.mistral.ai/v1".to_string(),
        api_key: api_key.to_string(),
        model: model.to_string(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 32_768,
        },
    }
}

/// A custom OpenAI-compatible endpoint with conservative output limits.
pub fn custom_defaults(
    provider_name: &str,
    base_url: &str,
    api_key: &str,
    model: &str,
) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: provider_name.to_string(),
        base_url: base_url.to_string(),
        api_key: api_key.to_string(),
        model: model.to_string(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 16_384,
        },
    }
}

/// Google Gemini defaults (OpenAI-compatible beta endpoint).
pub fn gemini_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "gemini".to_string(),
        base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
        api_key: api_key.to_string(),
        model: model.to_string(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 1_000_000,
            max_output_tokens: 65_536,
        },
    }
}
