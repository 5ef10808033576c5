//! SQLite implementation of the agent's database tools.
//!
//! Implements `SampleStore` from `parlance-core` over a [`DatabasePool`].
//! All tool reads go through the reader pool; `run_query` only ever sees
//! SELECT statements, so the single writer connection stays free for
//! bootstrap work.

use std::path::PathBuf;

use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row};
use tracing::debug;

use parlance_core::agent::{SampleStore, SampleStoreConnector};
use parlance_types::error::{BootstrapError, StoreError};
use parlance_types::schema::SampleTable;

use super::bootstrap::bootstrap_database;
use super::pool::DatabasePool;

/// Result rows beyond this count are truncated in the rendered observation.
const MAX_RESULT_ROWS: usize = 20;

/// SQLite-backed implementation of the agent's database tools.
pub struct SqliteSampleStore {
    pool: DatabasePool,
}

impl SqliteSampleStore {
    /// Wrap an already-bootstrapped pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn query_err(e: sqlx::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

impl SampleStore for SqliteSampleStore {
    async fn list_tables(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_err)?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    async fn describe_table(&self, table: &str) -> Result<String, StoreError> {
        // Resolving through the closed enum doubles as injection protection:
        // only the eight fixed names ever reach the PRAGMA.
        let table: SampleTable = table
            .parse()
            .map_err(|_| StoreError::UnknownTable(table.to_string()))?;

        let rows: Vec<SqliteRow> =
            sqlx::query(&format!("PRAGMA table_info({})", table.name()))
                .fetch_all(&self.pool.reader)
                .await
                .map_err(query_err)?;

        let mut lines = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("name").map_err(query_err)?;
            let col_type: String = row.try_get("type").map_err(query_err)?;
            lines.push(format!("{name} {col_type}"));
        }
        Ok(format!("{}:\n{}", table.name(), lines.join("\n")))
    }

    async fn run_query(&self, sql: &str) -> Result<String, StoreError> {
        let statement = sql.trim();
        let statement = statement.strip_suffix(';').unwrap_or(statement).trim_end();

        if !statement.to_lowercase().starts_with("select") {
            return Err(StoreError::ReadOnly(statement.to_string()));
        }
        if statement.contains(';') {
            return Err(StoreError::ReadOnly(statement.to_string()));
        }

        debug!(sql = statement, "running agent query");

        let rows: Vec<SqliteRow> = sqlx::query(statement)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_err)?;

        Ok(render_rows(&rows))
    }
}

/// Render result rows as a pipe-separated header plus value lines.
fn render_rows(rows: &[SqliteRow]) -> String {
    let Some(first) = rows.first() else {
        return "(no rows)".to_string();
    };

    let header = first
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![header];
    for row in rows.iter().take(MAX_RESULT_ROWS) {
        let values = (0..row.columns().len())
            .map(|i| render_value(row, i))
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(values);
    }

    if rows.len() > MAX_RESULT_ROWS {
        lines.push(format!("({} more rows truncated)", rows.len() - MAX_RESULT_ROWS));
    }

    lines.join("\n")
}

/// Decode one column as text, trying the SQLite storage classes in turn.
fn render_value(row: &SqliteRow, index: usize) -> String {
    if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
        return value.map_or_else(|| "NULL".to_string(), |v| v.to_string());
    }
    if let Ok(value) = row.try_get::<Option<f64>, _>(index) {
        return value.map_or_else(|| "NULL".to_string(), |v| v.to_string());
    }
    if let Ok(value) = row.try_get::<Option<String>, _>(index) {
        return value.unwrap_or_else(|| "NULL".to_string());
    }
    if let Ok(value) = row.try_get::<Option<Vec<u8>>, _>(index) {
        return value.map_or_else(|| "NULL".to_string(), |v| format!("<{} bytes>", v.len()));
    }
    "?".to_string()
}

/// Builds bootstrapped [`SqliteSampleStore`]s for named databases under the
/// data directory.
pub struct SqliteConnector {
    data_dir: PathBuf,
}

impl SqliteConnector {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

impl SampleStoreConnector for SqliteConnector {
    type Store = SqliteSampleStore;

    async fn connect(&self, database: &str) -> Result<SqliteSampleStore, BootstrapError> {
        let pool = bootstrap_database(&self.data_dir, database).await?;
        Ok(SqliteSampleStore::new(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, SqliteSampleStore) {
        let dir = tempfile::tempdir().unwrap();
        let pool = bootstrap_database(dir.path(), "retail").await.unwrap();
        (dir, SqliteSampleStore::new(pool))
    }

    #[tokio::test]
    async fn list_tables_returns_sample_schema() {
        let (_dir, store) = store().await;
        let tables = store.list_tables().await.unwrap();
        assert!(tables.contains(&"customers".to_string()));
        assert!(tables.contains(&"products".to_string()));
        assert_eq!(tables.len(), 8);
    }

    #[tokio::test]
    async fn describe_table_lists_columns() {
        let (_dir, store) = store().await;
        let description = store.describe_table("customers").await.unwrap();
        assert!(description.starts_with("customers:"));
        assert!(description.contains("customerNumber INTEGER"));
        assert!(description.contains("creditLimit REAL"));
    }

    #[tokio::test]
    async fn describe_table_is_case_insensitive() {
        let (_dir, store) = store().await;
        let description = store.describe_table("Customers").await.unwrap();
        assert!(description.contains("customerNumber"));
    }

    #[tokio::test]
    async fn describe_unknown_table_rejected() {
        let (_dir, store) = store().await;
        let err = store.describe_table("invoices").await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownTable(_)));
    }

    #[tokio::test]
    async fn run_query_renders_rows() {
        let (_dir, store) = store().await;
        let result = store
            .run_query("SELECT customerNumber, customerName, creditLimit FROM customers ORDER BY customerNumber")
            .await
            .unwrap();
        assert!(result.contains("customerNumber | customerName | creditLimit"));
        assert!(result.contains("103 | Atelier graphique | 21000"));
        assert!(result.contains("112 | Signal Gift Stores | 71800"));
    }

    #[tokio::test]
    async fn run_query_handles_null_values() {
        let (_dir, store) = store().await;
        let result = store
            .run_query("SELECT state FROM customers ORDER BY customerNumber")
            .await
            .unwrap();
        assert!(result.contains("NULL"));
        assert!(result.contains("NV"));
    }

    #[tokio::test]
    async fn run_query_empty_result() {
        let (_dir, store) = store().await;
        let result = store.run_query("SELECT * FROM orders").await.unwrap();
        assert_eq!(result, "(no rows)");
    }

    #[tokio::test]
    async fn run_query_allows_trailing_semicolon() {
        let (_dir, store) = store().await;
        let result = store
            .run_query("SELECT COUNT(*) FROM customers;")
            .await
            .unwrap();
        assert!(result.contains('2'));
    }

    #[tokio::test]
    async fn run_query_rejects_non_select() {
        let (_dir, store) = store().await;
        for sql in [
            "DROP TABLE customers",
            "DELETE FROM customers",
            "INSERT INTO customers (customerNumber) VALUES (1)",
            "UPDATE customers SET creditLimit = 0",
        ] {
            let err = store.run_query(sql).await.unwrap_err();
            assert!(matches!(err, StoreError::ReadOnly(_)), "{sql}");
        }
    }

    #[tokio::test]
    async fn run_query_rejects_multiple_statements() {
        let (_dir, store) = store().await;
        let err = store
            .run_query("SELECT 1; DROP TABLE customers")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ReadOnly(_)));
    }

    #[tokio::test]
    async fn run_query_reports_sql_errors() {
        let (_dir, store) = store().await;
        let err = store
            .run_query("SELECT nonsense FROM customers")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[tokio::test]
    async fn connector_yields_ready_store() {
        let dir = tempfile::tempdir().unwrap();
        let connector = SqliteConnector::new(dir.path().to_path_buf());
        let store = connector.connect("retail").await.unwrap();

        let tables = store.list_tables().await.unwrap();
        assert_eq!(tables.len(), 8);
    }
}
