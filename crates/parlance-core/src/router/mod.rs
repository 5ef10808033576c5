//! The multi-model ask pipeline: language detection, rule-based routing,
//! and generation dispatch.

pub mod detect;
pub mod dispatch;
pub mod rules;

pub use detect::LanguageDetector;
pub use dispatch::{GenerationDispatcher, GenerationOutput, ROUTED_MAX_TOKENS};
pub use rules::QueryRouter;
