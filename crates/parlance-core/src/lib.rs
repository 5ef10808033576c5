//! Business logic for Parlance.
//!
//! Holds the provider and store trait seams plus the two pipelines:
//! the database-chat session (bounded SQL agent + response formatter +
//! session orchestrator) and the multi-model ask pipeline (language-aware
//! query router + generation dispatcher).
//!
//! This crate never depends on parlance-infra; concrete SQLite and HTTP
//! provider implementations are pinned to these generics in the API layer.

pub mod agent;
pub mod chat;
pub mod llm;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;
