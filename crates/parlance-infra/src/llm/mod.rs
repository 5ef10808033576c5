//! LLM provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined in
//! `parlance-core`, plus a provider factory ([`create_provider`]) that
//! constructs the right provider from a [`ProviderConfig`], and a connection
//! test function ([`test_provider_connection`]) for verifying provider
//! connectivity.
//!
//! [`LlmProvider`]: parlance_core::llm::provider::LlmProvider

pub mod anthropic;
pub mod openai_compat;

use secrecy::SecretString;

use parlance_core::llm::box_provider::BoxLlmProvider;
use parlance_types::llm::{
    CompletionRequest, LlmError, Message, MessageRole, ProviderConfig, ProviderType,
};

use self::anthropic::AnthropicProvider;
use self::openai_compat::OpenAiCompatibleProvider;

/// Resolve the API key for a provider from its configured environment variable.
pub fn resolve_api_key(config: &ProviderConfig) -> Option<String> {
    config
        .api_key_env
        .as_deref()
        .and_then(|var| std::env::var(var).ok())
        .filter(|key| !key.is_empty())
}

/// Create a [`BoxLlmProvider`] from a [`ProviderConfig`].
///
/// Matches on the provider type to construct the appropriate concrete
/// provider.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] when no API key is available.
pub fn create_provider(
    config: &ProviderConfig,
    api_key: Option<&str>,
) -> Result<BoxLlmProvider, LlmError> {
    match config.provider_type {
        ProviderType::Anthropic => {
            let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
            let secret = SecretString::from(key.to_string());
            let mut provider = AnthropicProvider::new(secret, config.model.clone());
            if let Some(ref base_url) = config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(BoxLlmProvider::new(provider))
        }
        ProviderType::OpenAiCompatible => {
            let key = api_key.ok_or(LlmError::AuthenticationFailed)?;

            // Use base_url if specified, otherwise infer from provider name
            let provider = match config.base_url.as_deref() {
                Some(base_url) => {
                    OpenAiCompatibleProvider::new(openai_compat::config::custom_defaults(
                        &config.name,
                        base_url,
                        key,
                        &config.model,
                    ))
                }
                None => match config.name.as_str() {
                    "mistral" => OpenAiCompatibleProvider::mistral(key, &config.model),
                    "gemini" => OpenAiCompatibleProvider::gemini(key, &config.model),
                    // Default to OpenAI base URL for unknown providers
                    _ => OpenAiCompatibleProvider::openai(key, &config.model),
                },
            };
            Ok(BoxLlmProvider::new(provider))
        }
    }
}

/// Test provider connectivity by sending a minimal completion request.
///
/// Used to verify an API key and endpoint are working. Sends a tiny "Hello"
/// message with minimal token budget.
pub async fn test_provider_connection(provider: &BoxLlmProvider) -> Result<(), LlmError> {
    let request = CompletionRequest {
        model: String::new(), // Provider uses its configured default
        messages: vec![Message {
            role: MessageRole::User,
            content: "Hello".to_string(),
        }],
        system: None,
        max_tokens: 10,
        temperature: Some(0.0),
        stop_sequences: None,
    };
    provider.complete(&request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openai_config() -> ProviderConfig {
        ProviderConfig {
            name: "openai".to_string(),
            provider_type: ProviderType::OpenAiCompatible,
            api_key_env: Some("OPENAI_API_KEY".to_string()),
            base_url: None,
            model: "gpt-4o".to_string(),
        }
    }

    #[test]
    fn test_create_provider_openai_by_name() {
        let provider = create_provider(&openai_config(), Some("sk-test")).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_create_provider_mistral_by_name() {
        let config = ProviderConfig {
            name: "mistral".to_string(),
            provider_type: ProviderType::OpenAiCompatible,
            api_key_env: Some("MISTRAL_API_KEY".to_string()),
            base_url: None,
            model: "mistral-large-latest".to_string(),
        };
        let provider = create_provider(&config, Some("mistral-key")).unwrap();
        assert_eq!(provider.name(), "mistral");
    }

    #[test]
    fn test_create_provider_anthropic() {
        let config = ProviderConfig {
            name: "anthropic".to_string(),
            provider_type: ProviderType::Anthropic,
            api_key_env: Some("ANTHROPIC_API_KEY".to_string()),
            base_url: None,
            model: "claude-sonnet-4-20250514".to_string(),
        };
        let provider = create_provider(&config, Some("sk-ant-test")).unwrap();
        assert_eq!(provider.name(), "anthropic");
    }

    #[test]
    fn test_create_provider_with_base_url() {
        let config = ProviderConfig {
            name: "custom-provider".to_string(),
            provider_type: ProviderType::OpenAiCompatible,
            api_key_env: Some("CUSTOM_API_KEY".to_string()),
            base_url: Some("https://custom.api.example.com/v1".to_string()),
            model: "custom-model".to_string(),
        };
        let provider = create_provider(&config, Some("custom-key")).unwrap();
        assert_eq!(provider.name(), "custom-provider");
    }

    #[test]
    fn test_create_provider_missing_key() {
        let result = create_provider(&openai_config(), None);
        assert!(matches!(result, Err(LlmError::AuthenticationFailed)));
    }

    #[test]
    fn test_resolve_api_key_missing_env() {
        let config = ProviderConfig {
            api_key_env: Some("PARLANCE_TEST_KEY_THAT_DOES_NOT_EXIST".to_string()),
            ..openai_config()
        };
        assert!(resolve_api_key(&config).is_none());
    }

    #[test]
    fn test_resolve_api_key_no_env_configured() {
        let config = ProviderConfig {
            api_key_env: None,
            ..openai_config()
        };
        assert!(resolve_api_key(&config).is_none());
    }
}
