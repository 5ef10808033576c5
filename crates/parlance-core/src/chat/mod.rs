//! The database-chat pipeline: transcript, formatter, and session orchestration.

pub mod formatter;
pub mod session;
pub mod transcript;

pub use formatter::ResponseFormatter;
pub use session::{CONNECT_OK, ConnectionState, PROMPT_TO_CONNECT, SessionOrchestrator};
pub use transcript::Transcript;
