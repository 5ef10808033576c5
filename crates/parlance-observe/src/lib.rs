//! Observability setup for Parlance.

pub mod tracing_setup;
