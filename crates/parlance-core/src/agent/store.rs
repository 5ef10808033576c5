//! SampleStore trait definition.
//!
//! The database tools the SQL agent can use during its reasoning loop.
//! Implementations live in parlance-infra (e.g., `SqliteSampleStore`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use parlance_types::error::{BootstrapError, StoreError};

/// Read-only database tools exposed to the SQL agent.
///
/// Every method returns text because tool results are fed back into the
/// model's context as observations.
pub trait SampleStore: Send + Sync {
    /// Names of the tables in the connected database.
    fn list_tables(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Column names and types for one table, one column per line.
    fn describe_table(
        &self,
        table: &str,
    ) -> impl std::future::Future<Output = Result<String, StoreError>> + Send;

    /// Execute a single SELECT statement and render the result rows.
    ///
    /// Non-SELECT statements are rejected with [`StoreError::ReadOnly`].
    fn run_query(
        &self,
        sql: &str,
    ) -> impl std::future::Future<Output = Result<String, StoreError>> + Send;
}

/// Builds a ready [`SampleStore`] for a named database.
///
/// Connecting bootstraps the backing store: schema creation plus first-use
/// seeding, idempotently. The orchestrator only ever sees a store that is
/// fully initialized.
pub trait SampleStoreConnector: Send + Sync {
    type Store: SampleStore;

    fn connect(
        &self,
        database: &str,
    ) -> impl std::future::Future<Output = Result<Self::Store, BootstrapError>> + Send;
}
