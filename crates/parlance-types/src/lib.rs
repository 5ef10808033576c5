//! Shared domain types for Parlance.
//!
//! This crate holds the data shapes used across the workspace: chat turns,
//! LLM request/response types, routing labels and decisions, the fixed sample
//! database schema, configuration, and per-concern error enums. It has no
//! business logic and no I/O.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod routing;
pub mod schema;
