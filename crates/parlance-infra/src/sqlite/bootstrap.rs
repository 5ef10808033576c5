//! Idempotent sample-database bootstrap.
//!
//! Given a database name, creates `<name>.db` under the data directory,
//! executes the fixed `CREATE TABLE IF NOT EXISTS` DDL for all eight sample
//! tables, and inserts the two literal customer seed rows only when the
//! customers table is empty. Repeated bootstraps of the same database are
//! no-ops.

use std::path::Path;

use tracing::{debug, info};

use parlance_types::error::BootstrapError;
use parlance_types::schema::{SEED_CUSTOMERS, SampleTable};

use super::pool::DatabasePool;

/// Names are used as file stems; anything path-like is rejected.
fn validate_database_name(name: &str) -> Result<(), BootstrapError> {
    let valid = !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(BootstrapError::InvalidName(name.to_string()))
    }
}

fn storage_err(e: impl std::fmt::Display) -> BootstrapError {
    BootstrapError::Storage(e.to_string())
}

/// Open (creating if missing) the named sample database, ensure the fixed
/// schema exists, and seed the customers table on first use.
///
/// Returns the pool; the caller wraps it in a `SqliteSampleStore`.
pub async fn bootstrap_database(
    data_dir: &Path,
    name: &str,
) -> Result<DatabasePool, BootstrapError> {
    validate_database_name(name)?;

    tokio::fs::create_dir_all(data_dir).await.map_err(storage_err)?;

    let db_path = data_dir.join(format!("{name}.db"));
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = DatabasePool::new(&url).await.map_err(storage_err)?;

    for table in SampleTable::ALL {
        sqlx::query(table.create_ddl())
            .execute(&pool.writer)
            .await
            .map_err(storage_err)?;
    }

    // Seed only an empty customers table; the count guard is what makes
    // repeated bootstraps idempotent.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool.writer)
        .await
        .map_err(storage_err)?;

    if count == 0 {
        for seed in SEED_CUSTOMERS {
            sqlx::query(
                "INSERT INTO customers VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(seed.customer_number)
            .bind(seed.customer_name)
            .bind(seed.contact_last_name)
            .bind(seed.contact_first_name)
            .bind(seed.phone)
            .bind(seed.address_line1)
            .bind(seed.address_line2)
            .bind(seed.city)
            .bind(seed.state)
            .bind(seed.postal_code)
            .bind(seed.country)
            .bind(seed.sales_rep_employee_number)
            .bind(seed.credit_limit)
            .execute(&pool.writer)
            .await
            .map_err(storage_err)?;
        }
        info!(database = name, rows = SEED_CUSTOMERS.len(), "seeded customers table");
    } else {
        debug!(database = name, rows = count, "customers table already seeded");
    }

    Ok(pool)
}
