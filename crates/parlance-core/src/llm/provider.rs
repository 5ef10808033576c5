//! LlmProvider trait definition.
//!
//! This is the core abstraction that all LLM providers implement.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the
//! object-safe wrapper for runtime dispatch lives in
//! [`super::box_provider::BoxLlmProvider`].

use parlance_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities,
};

/// Trait for LLM provider backends (Anthropic, OpenAI-compatible, etc.).
///
/// Implementations live in parlance-infra (e.g., `AnthropicProvider`,
/// `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic", "openai").
    fn name(&self) -> &str;

    /// Output limits of this provider's configured model.
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    ///
    /// An empty `request.model` means "use the provider's configured default".
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
