//! The bounded SQL agent loop.
//!
//! SqlAgent turns a natural-language question into a database answer by
//! letting the LLM drive the [`SampleStore`] tools for at most
//! [`MAX_STEPS`] steps. Each step the model emits one JSON action; tool
//! output is fed back as an observation. OTel GenAI spans instrument every
//! LLM call.

use std::time::Duration;

use tracing::{Instrument, debug, info_span, warn};

use parlance_types::error::AgentError;
use parlance_types::llm::{CompletionRequest, Message, MessageRole};

use crate::llm::box_provider::BoxLlmProvider;
use crate::llm::complete_with_timeout;

use super::action::{AgentAction, parse_action};
use super::store::SampleStore;

/// Cap on reasoning steps, preventing runaway tool loops.
pub const MAX_STEPS: usize = 5;

/// Output budget per reasoning step. Actions are small JSON objects; the
/// final answer is prose but never long.
const STEP_MAX_TOKENS: u32 = 1024;

/// Deterministic tool selection.
const AGENT_TEMPERATURE: f64 = 0.0;

const AGENT_SYSTEM_PROMPT: &str = "\
You are a SQL analyst answering questions about a SQLite database.

On every turn respond with exactly one JSON object and nothing else, in one \
of these forms:
  {\"action\": \"list_tables\"}
  {\"action\": \"describe_table\", \"table\": \"<table name>\"}
  {\"action\": \"run_query\", \"sql\": \"<one SELECT statement>\"}
  {\"action\": \"final_answer\", \"answer\": \"<answer to the user's question>\"}

Inspect the schema before querying unfamiliar tables. The database is \
read-only: only SELECT statements are executed. When you know the answer, \
return it with the final_answer action.";

const MALFORMED_ACTION_FEEDBACK: &str = "\
Observation: that was not a valid action. Respond with exactly one JSON \
object in one of the documented forms.";

/// Executes the bounded reasoning loop on behalf of the chat session.
pub struct SqlAgent {
    provider: BoxLlmProvider,
    deadline: Duration,
}

impl SqlAgent {
    /// Create a new agent over the given provider with a per-call deadline.
    pub fn new(provider: BoxLlmProvider, deadline: Duration) -> Self {
        Self { provider, deadline }
    }

    /// Answer one natural-language question against the connected store.
    ///
    /// Tool failures (bad SQL, unknown tables) are fed back to the model as
    /// observations so it can correct itself within the step budget;
    /// provider failures and timeouts abort the loop. If no final answer is
    /// produced within [`MAX_STEPS`] steps, returns [`AgentError::StepLimit`].
    pub async fn run<S: SampleStore>(
        &self,
        store: &S,
        question: &str,
    ) -> Result<String, AgentError> {
        let mut messages = vec![Message {
            role: MessageRole::User,
            content: question.to_string(),
        }];

        for step in 1..=MAX_STEPS {
            let request = CompletionRequest {
                model: String::new(),
                messages: messages.clone(),
                system: Some(AGENT_SYSTEM_PROMPT.to_string()),
                max_tokens: STEP_MAX_TOKENS,
                temperature: Some(AGENT_TEMPERATURE),
                stop_sequences: None,
            };

            let span = info_span!(
                "gen_ai.agent_step",
                gen_ai.system = self.provider.name(),
                gen_ai.request.max_tokens = request.max_tokens,
                step = step,
            );

            let response = complete_with_timeout(&self.provider, &request, self.deadline)
                .instrument(span)
                .await?;

            messages.push(Message {
                role: MessageRole::Assistant,
                content: response.content.clone(),
            });

            match parse_action(&response.content) {
                Ok(AgentAction::FinalAnswer { answer }) => {
                    debug!(step, "agent produced final answer");
                    return Ok(answer);
                }
                Ok(action) => {
                    let observation = self.execute_tool(store, &action).await;
                    debug!(step, action = ?action_name(&action), "agent tool step");
                    messages.push(Message {
                        role: MessageRole::User,
                        content: format!("Observation: {observation}"),
                    });
                }
                Err(err) => {
                    warn!(step, error = %err, "malformed agent action");
                    messages.push(Message {
                        role: MessageRole::User,
                        content: MALFORMED_ACTION_FEEDBACK.to_string(),
                    });
                }
            }
        }

        Err(AgentError::StepLimit { max: MAX_STEPS })
    }

    /// Run one tool and render its outcome as observation text.
    ///
    /// Store errors become observations rather than aborting the loop; a
    /// mistyped table name or a rejected statement is something the model
    /// can recover from on the next step.
    async fn execute_tool<S: SampleStore>(&self, store: &S, action: &AgentAction) -> String {
        let result = match action {
            AgentAction::ListTables => store.list_tables().await.map(|t| t.join(", ")),
            AgentAction::DescribeTable { table } => store.describe_table(table).await,
            AgentAction::RunQuery { sql } => store.run_query(sql).await,
            AgentAction::FinalAnswer { .. } => unreachable!("final answers never reach tools"),
        };

        match result {
            Ok(text) if text.is_empty() => "(no results)".to_string(),
            Ok(text) => text,
            Err(err) => format!("tool failed: {err}"),
        }
    }
}

fn action_name(action: &AgentAction) -> &'static str {
    match action {
        AgentAction::ListTables => "list_tables",
        AgentAction::DescribeTable { .. } => "describe_table",
        AgentAction::RunQuery { .. } => "run_query",
        AgentAction::FinalAnswer { .. } => "final_answer",
    }
}
