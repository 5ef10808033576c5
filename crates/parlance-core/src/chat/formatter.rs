//! The response formatter.
//!
//! Takes the raw agent answer plus the running transcript and produces the
//! polished reply shown to the user, via one fixed-template LLM call. Purely
//! functional over its three inputs; no side effects beyond the provider
//! call.

use std::time::Duration;

use tracing::{Instrument, info_span};

use parlance_types::llm::{CompletionRequest, LlmError, Message, MessageRole};

use crate::llm::box_provider::BoxLlmProvider;
use crate::llm::complete_with_timeout;

use super::transcript::Transcript;

/// Output budget for the polished reply.
const FORMATTER_MAX_TOKENS: u32 = 1024;

/// Deterministic rewriting.
const FORMATTER_TEMPERATURE: f64 = 0.0;

const FORMATTER_TEMPLATE: &str = "\
You are a data analyst at a company. You are interacting with a user who is \
asking questions about the company's database.
Based on the agent's response, write a natural language response.

Conversation History: {chat_history}
User question: {question}
Agent Response: {response}";

/// Rewrites raw agent answers into polished replies.
pub struct ResponseFormatter {
    provider: BoxLlmProvider,
    deadline: Duration,
}

impl ResponseFormatter {
    /// Create a new formatter over the given provider with a per-call deadline.
    pub fn new(provider: BoxLlmProvider, deadline: Duration) -> Self {
        Self { provider, deadline }
    }

    /// Produce the user-facing reply for one exchange.
    pub async fn format(
        &self,
        transcript: &Transcript,
        question: &str,
        agent_answer: &str,
    ) -> Result<String, LlmError> {
        let prompt = FORMATTER_TEMPLATE
            .replace("{chat_history}", &transcript.render())
            .replace("{question}", question)
            .replace("{response}", agent_answer);

        let request = CompletionRequest {
            model: String::new(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt,
            }],
            system: None,
            max_tokens: FORMATTER_MAX_TOKENS,
            temperature: Some(FORMATTER_TEMPERATURE),
            stop_sequences: None,
        };

        let span = info_span!(
            "gen_ai.format_response",
            gen_ai.system = self.provider.name(),
            gen_ai.request.max_tokens = request.max_tokens,
        );

        let response = complete_with_timeout(&self.provider, &request, self.deadline)
            .instrument(span)
            .await?;
        Ok(response.content)
    }
}
