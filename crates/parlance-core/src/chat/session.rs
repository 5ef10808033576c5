//! The chat session orchestrator.
//!
//! A session is a state machine over a tagged connection state:
//! Disconnected (initial) and Connected(store). Chatting while Disconnected
//! performs no LLM call at all; the HTTP layer renders the
//! [`PROMPT_TO_CONNECT`] text for that case. While Connected, each chat
//! request appends the user turn, runs the agent and then the formatter,
//! appends the assistant turn, and returns the formatted reply.
//!
//! Generic over [`SampleStoreConnector`] so core never depends on
//! parlance-infra; the API layer pins the SQLite implementation.

use tracing::{info, warn};

use parlance_types::error::SessionError;

use crate::agent::{SampleStoreConnector, SqlAgent};

use super::formatter::ResponseFormatter;
use super::transcript::Transcript;

/// Fixed reply for chat requests that arrive before a connection exists.
pub const PROMPT_TO_CONNECT: &str = "Please connect to a database first.";

/// Fixed status string for a successful connection.
pub const CONNECT_OK: &str = "Connected to database successfully!";

/// Tagged connection state: no nullable fields, no half-connected sessions.
pub enum ConnectionState<S> {
    Disconnected,
    Connected(S),
}

/// Orchestrates one conversation: connection lifecycle, transcript
/// ownership, and the agent → formatter exchange per chat request.
pub struct SessionOrchestrator<C: SampleStoreConnector> {
    connector: C,
    state: ConnectionState<C::Store>,
    transcript: Transcript,
    agent: SqlAgent,
    formatter: ResponseFormatter,
}

impl<C: SampleStoreConnector> SessionOrchestrator<C> {
    /// Create a session in the Disconnected state with an empty transcript.
    pub fn new(connector: C, agent: SqlAgent, formatter: ResponseFormatter) -> Self {
        Self {
            connector,
            state: ConnectionState::Disconnected,
            transcript: Transcript::new(),
            agent,
            formatter,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected(_))
    }

    /// Bootstrap the named database and transition to Connected.
    ///
    /// Reconnecting while already Connected re-runs the (idempotent)
    /// bootstrap and replaces the handle; the transcript is kept. On failure
    /// the previous state is kept unchanged.
    pub async fn connect(&mut self, database: &str) -> Result<&'static str, SessionError> {
        match self.connector.connect(database).await {
            Ok(store) => {
                self.state = ConnectionState::Connected(store);
                info!(database, "session connected");
                Ok(CONNECT_OK)
            }
            Err(err) => {
                warn!(database, error = %err, "session connect failed");
                Err(SessionError::Bootstrap(err))
            }
        }
    }

    /// Service one chat request.
    ///
    /// While Disconnected this returns [`SessionError::NotConnected`] before
    /// touching any provider. On agent or formatter failure the user turn
    /// stays in the transcript and no assistant turn is appended.
    pub async fn chat(&mut self, message: &str) -> Result<String, SessionError> {
        let ConnectionState::Connected(store) = &self.state else {
            return Err(SessionError::NotConnected);
        };

        self.transcript.push_user(message);

        let raw_answer = self.agent.run(store, message).await?;
        let reply = self
            .formatter
            .format(&self.transcript, message, &raw_answer)
            .await
            .map_err(SessionError::Formatter)?;

        self.transcript.push_assistant(&reply);
        Ok(reply)
    }

    /// Reset the transcript. The one clear operation: the visible transcript
    /// and the formatter's conversation history are the same value.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
