//! Generation dispatch for routed queries.
//!
//! Holds one configured provider per [`ModelLabel`] and invokes the selected
//! backend with the original query text. The routed backends (Polyglot,
//! Chat) are capped at [`ROUTED_MAX_TOKENS`] output tokens; the Instruct
//! backend uses its provider's own output ceiling.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{Instrument, info, info_span};

use parlance_types::error::DispatchError;
use parlance_types::llm::{CompletionRequest, Message, MessageRole};
use parlance_types::routing::{ModelLabel, RoutingDecision};

use crate::llm::box_provider::BoxLlmProvider;
use crate::llm::complete_with_timeout;

/// Fixed output bound for the Polyglot and Chat backends.
pub const ROUTED_MAX_TOKENS: u32 = 200;

/// The generated reply together with the backend that produced it.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub label: ModelLabel,
    pub model: String,
    pub text: String,
}

/// Invokes the generation backend selected by the router.
pub struct GenerationDispatcher {
    providers: HashMap<ModelLabel, BoxLlmProvider>,
    deadline: Duration,
}

impl GenerationDispatcher {
    /// Create an empty dispatcher with a per-call deadline.
    pub fn new(deadline: Duration) -> Self {
        Self {
            providers: HashMap::new(),
            deadline,
        }
    }

    /// Register the provider serving one label. Last registration wins.
    pub fn register(mut self, label: ModelLabel, provider: BoxLlmProvider) -> Self {
        self.providers.insert(label, provider);
        self
    }

    /// Whether every label in the closed set has a provider.
    pub fn is_fully_wired(&self) -> bool {
        ModelLabel::ALL.iter().all(|l| self.providers.contains_key(l))
    }

    /// Generate a reply for a routed query.
    ///
    /// A label with no registered provider is the defensive branch:
    /// [`DispatchError::ModelUnavailable`], unreachable when the dispatcher
    /// is fully wired at startup.
    pub async fn generate(
        &self,
        decision: &RoutingDecision,
        query: &str,
    ) -> Result<GenerationOutput, DispatchError> {
        let provider = self
            .providers
            .get(&decision.label)
            .ok_or(DispatchError::ModelUnavailable(decision.label))?;

        let max_tokens = match decision.label {
            ModelLabel::Instruct => provider.capabilities().max_output_tokens,
            ModelLabel::Polyglot | ModelLabel::Chat => ROUTED_MAX_TOKENS,
        };

        let request = CompletionRequest {
            model: String::new(),
            messages: vec![Message {
                role: MessageRole::User,
                content: query.to_string(),
            }],
            system: None,
            max_tokens,
            temperature: None,
            stop_sequences: None,
        };

        let span = info_span!(
            "gen_ai.generate",
            gen_ai.system = provider.name(),
            gen_ai.request.max_tokens = max_tokens,
            label = %decision.label,
        );

        let response = complete_with_timeout(provider, &request, self.deadline)
            .instrument(span)
            .await?;

        info!(
            label = %decision.label,
            rule = %decision.rule,
            model = %response.model,
            "routed generation complete"
        );

        Ok(GenerationOutput {
            label: decision.label,
            model: response.model,
            text: response.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;
    use parlance_types::routing::{DetectedLanguage, RouteRule};

    fn decision(label: ModelLabel) -> RoutingDecision {
        RoutingDecision {
            label,
            rule: RouteRule::Default,
            language: DetectedLanguage::English,
        }
    }

    fn wired(
        instruct: &ScriptedProvider,
        polyglot: &ScriptedProvider,
        chat: &ScriptedProvider,
    ) -> GenerationDispatcher {
        GenerationDispatcher::new(Duration::from_secs(5))
            .register(ModelLabel::Instruct, BoxLlmProvider::new(instruct.clone()))
            .register(ModelLabel::Polyglot, BoxLlmProvider::new(polyglot.clone()))
            .register(ModelLabel::Chat, BoxLlmProvider::new(chat.clone()))
    }

    #[tokio::test]
    async fn routed_backends_get_fixed_output_bound() {
        let instruct = ScriptedProvider::with_responses(["a"]);
        let polyglot = ScriptedProvider::with_responses(["b"]);
        let chat = ScriptedProvider::with_responses(["c"]);
        let dispatcher = wired(&instruct, &polyglot, &chat);

        dispatcher
            .generate(&decision(ModelLabel::Polyglot), "bonjour")
            .await
            .unwrap();
        assert_eq!(polyglot.requests()[0].max_tokens, ROUTED_MAX_TOKENS);

        dispatcher
            .generate(&decision(ModelLabel::Chat), "hello")
            .await
            .unwrap();
        assert_eq!(chat.requests()[0].max_tokens, ROUTED_MAX_TOKENS);
    }

    #[tokio::test]
    async fn instruct_backend_uses_capability_ceiling() {
        let instruct = ScriptedProvider::with_responses(["a"]).with_max_output_tokens(4_096);
        let polyglot = ScriptedProvider::with_responses(["b"]);
        let chat = ScriptedProvider::with_responses(["c"]);
        let dispatcher = wired(&instruct, &polyglot, &chat);

        dispatcher
            .generate(&decision(ModelLabel::Instruct), "what is normalization?")
            .await
            .unwrap();
        assert_eq!(instruct.requests()[0].max_tokens, 4_096);
    }

    #[tokio::test]
    async fn output_carries_label_and_text() {
        let instruct = ScriptedProvider::with_responses(["an explanation"]);
        let polyglot = ScriptedProvider::with_responses(["b"]);
        let chat = ScriptedProvider::with_responses(["c"]);
        let dispatcher = wired(&instruct, &polyglot, &chat);

        let output = dispatcher
            .generate(&decision(ModelLabel::Instruct), "what is normalization?")
            .await
            .unwrap();
        assert_eq!(output.label, ModelLabel::Instruct);
        assert_eq!(output.text, "an explanation");
    }

    #[tokio::test]
    async fn missing_provider_is_defensive_error() {
        let dispatcher = GenerationDispatcher::new(Duration::from_secs(5));
        assert!(!dispatcher.is_fully_wired());

        let err = dispatcher
            .generate(&decision(ModelLabel::Chat), "hello")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::ModelUnavailable(ModelLabel::Chat)
        ));
    }

    #[tokio::test]
    async fn fully_wired_after_all_registrations() {
        let instruct = ScriptedProvider::with_responses(["a"]);
        let polyglot = ScriptedProvider::with_responses(["b"]);
        let chat = ScriptedProvider::with_responses(["c"]);
        let dispatcher = wired(&instruct, &polyglot, &chat);
        assert!(dispatcher.is_fully_wired());
    }

    #[tokio::test]
    async fn query_is_sent_verbatim_as_user_message() {
        let instruct = ScriptedProvider::with_responses(["a"]);
        let polyglot = ScriptedProvider::with_responses(["réponse"]);
        let chat = ScriptedProvider::with_responses(["c"]);
        let dispatcher = wired(&instruct, &polyglot, &chat);

        dispatcher
            .generate(&decision(ModelLabel::Polyglot), "Comment ça va?")
            .await
            .unwrap();

        let request = &polyglot.requests()[0];
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, "Comment ça va?");
        assert!(request.system.is_none());
    }
}
