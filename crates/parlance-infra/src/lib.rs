//! Infrastructure implementations for Parlance.
//!
//! Concrete implementations of the trait seams defined in parlance-core:
//! SQLite storage (pool, bootstrap, sample store), LLM providers (Anthropic
//! and OpenAI-compatible), whatlang-based language detection, and
//! configuration loading.

pub mod config;
pub mod detect;
pub mod llm;
pub mod sqlite;
