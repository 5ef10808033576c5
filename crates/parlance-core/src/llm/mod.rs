//! LLM provider abstraction.
//!
//! [`provider::LlmProvider`] is the trait all backends implement;
//! [`box_provider::BoxLlmProvider`] is the type-erased wrapper used at
//! runtime. [`complete_with_timeout`] is the single entry point the rest of
//! the crate uses for external calls, so every LLM invocation carries an
//! explicit deadline.

pub mod box_provider;
pub mod provider;

use std::time::Duration;

use parlance_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use self::box_provider::BoxLlmProvider;

/// Send a completion request with an explicit deadline.
///
/// A call that outlives `deadline` is abandoned and surfaces as
/// [`LlmError::Timeout`]; a hang in a provider never hangs the caller.
pub async fn complete_with_timeout(
    provider: &BoxLlmProvider,
    request: &CompletionRequest,
    deadline: Duration,
) -> Result<CompletionResponse, LlmError> {
    match tokio::time::timeout(deadline, provider.complete(request)).await {
        Ok(result) => result,
        Err(_) => Err(LlmError::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;
    use parlance_types::llm::{Message, MessageRole};

    fn request(content: &str) -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            messages: vec![Message {
                role: MessageRole::User,
                content: content.to_string(),
            }],
            system: None,
            max_tokens: 64,
            temperature: None,
            stop_sequences: None,
        }
    }

    #[tokio::test]
    async fn complete_within_deadline_passes_through() {
        let provider = ScriptedProvider::with_responses(["hello back"]);
        let boxed = BoxLlmProvider::new(provider.clone());

        let response = complete_with_timeout(&boxed, &request("hello"), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(response.content, "hello back");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn slow_call_maps_to_timeout_error() {
        let provider = ScriptedProvider::with_responses(["too late"])
            .with_delay(Duration::from_millis(200));
        let boxed = BoxLlmProvider::new(provider);

        let err = complete_with_timeout(&boxed, &request("hello"), Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Timeout(_)));
    }
}
