//! Global configuration for Parlance.
//!
//! Deserialized from `{data_dir}/config.toml`. Every field has a default so
//! a missing or partial file still yields a working configuration; API keys
//! are never stored here, only the names of the environment variables that
//! hold them.

use serde::{Deserialize, Serialize};

use crate::llm::{ProviderConfig, ProviderType};

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_agent_provider() -> ProviderConfig {
    ProviderConfig {
        name: "openai".to_string(),
        provider_type: ProviderType::OpenAiCompatible,
        api_key_env: Some("OPENAI_API_KEY".to_string()),
        base_url: None,
        model: "gpt-4o".to_string(),
    }
}

fn default_formatter_provider() -> ProviderConfig {
    default_agent_provider()
}

fn default_instruct_provider() -> ProviderConfig {
    ProviderConfig {
        name: "openai".to_string(),
        provider_type: ProviderType::OpenAiCompatible,
        api_key_env: Some("OPENAI_API_KEY".to_string()),
        base_url: None,
        model: "gpt-4o".to_string(),
    }
}

fn default_polyglot_provider() -> ProviderConfig {
    ProviderConfig {
        name: "mistral".to_string(),
        provider_type: ProviderType::OpenAiCompatible,
        api_key_env: Some("MISTRAL_API_KEY".to_string()),
        base_url: None,
        model: "mistral-large-latest".to_string(),
    }
}

fn default_chat_provider() -> ProviderConfig {
    ProviderConfig {
        name: "openai".to_string(),
        provider_type: ProviderType::OpenAiCompatible,
        api_key_env: Some("OPENAI_API_KEY".to_string()),
        base_url: None,
        model: "gpt-4o-mini".to_string(),
    }
}

/// The three generation backends behind the ask pipeline, one per label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_instruct_provider")]
    pub instruct: ProviderConfig,
    #[serde(default = "default_polyglot_provider")]
    pub polyglot: ProviderConfig,
    #[serde(default = "default_chat_provider")]
    pub chat: ProviderConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            instruct: default_instruct_provider(),
            polyglot: default_polyglot_provider(),
            chat: default_chat_provider(),
        }
    }
}

/// Top-level configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Deadline applied to every external LLM call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Provider backing the SQL agent's reasoning loop.
    #[serde(default = "default_agent_provider")]
    pub agent: ProviderConfig,

    /// Provider backing the response formatter.
    #[serde(default = "default_formatter_provider")]
    pub formatter: ProviderConfig,

    /// Providers backing the routed ask pipeline.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            agent: default_agent_provider(),
            formatter: default_formatter_provider(),
            generation: GenerationConfig::default(),
        }
    }
}
