//! Scripted LLM provider shared by the crate's unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use parlance_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

use crate::llm::provider::LlmProvider;

struct Inner {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
    capabilities: ProviderCapabilities,
}

/// A provider that returns pre-scripted responses in order and records
/// every request it receives. Clones share state, so a test can keep a
/// handle after moving a clone into a `BoxLlmProvider`.
///
/// Builder methods (`with_delay`, `with_max_output_tokens`) must be called
/// before the provider is cloned.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    inner: Arc<Inner>,
}

impl ScriptedProvider {
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Inner {
                responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                delay: None,
                capabilities: ProviderCapabilities {
                    max_context_tokens: 200_000,
                    max_output_tokens: 8_192,
                },
            }),
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        let mut inner = self.into_unique();
        inner.delay = Some(delay);
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn with_max_output_tokens(self, max_output_tokens: u32) -> Self {
        let mut inner = self.into_unique();
        inner.capabilities.max_output_tokens = max_output_tokens;
        Self {
            inner: Arc::new(inner),
        }
    }

    fn into_unique(self) -> Inner {
        Arc::try_unwrap(self.inner)
            .unwrap_or_else(|_| panic!("builder methods must run before the provider is cloned"))
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.inner.requests.lock().unwrap().clone()
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.inner.capabilities
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.inner.delay {
            tokio::time::sleep(delay).await;
        }

        let content = self
            .inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::Provider {
                message: "scripted provider ran out of responses".to_string(),
            })?;

        Ok(CompletionResponse {
            id: "scripted".to_string(),
            content,
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}
