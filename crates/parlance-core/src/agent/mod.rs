//! The bounded tool-using SQL agent.

pub mod action;
pub mod engine;
pub mod store;

pub use action::{AgentAction, parse_action};
pub use engine::{MAX_STEPS, SqlAgent};
pub use store::{SampleStore, SampleStoreConnector};
