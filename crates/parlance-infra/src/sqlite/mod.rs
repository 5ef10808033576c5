//! SQLite storage: connection pooling, sample-database bootstrap, and the
//! agent's database tools.

pub mod bootstrap;
pub mod pool;
pub mod sample;

pub use bootstrap::bootstrap_database;
pub use pool::DatabasePool;
pub use sample::{SqliteConnector, SqliteSampleStore};
