//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use credstore::config::{Config, HashingConfig};
use credstore::domain::Hasher;
use credstore::infra::{Database, UserStore};
use credstore::services::Accounts;

/// Cheapest Argon2 parameters the library accepts
pub const FAST_HASHING: HashingConfig = HashingConfig {
    memory_kib: 8,
    iterations: 1,
    parallelism: 1,
};

/// Config for a database URL with fast hashing and a single pooled connection.
///
/// One connection keeps every query on the same in-memory SQLite database.
pub fn test_config(database_url: &str) -> Config {
    let mut config = Config::for_database(database_url, "password");
    config.database_max_connections = 1;
    config.hashing = FAST_HASHING;
    config
}

/// Fresh in-memory database with migrations applied
pub async fn memory_database() -> Arc<Database> {
    let config = test_config("sqlite::memory:");
    Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should open"),
    )
}

/// File-backed database in `dir` with its own pool of `max_connections`.
///
/// Unlike the in-memory helper, several connections can hold the file open at
/// once, so concurrent writers really contend on the unique index.
pub async fn file_database(dir: &std::path::Path, max_connections: u32) -> Arc<Database> {
    let mut config = test_config(&file_url(dir));
    config.database_max_connections = max_connections;
    Arc::new(
        Database::connect(&config)
            .await
            .expect("file database should open"),
    )
}

/// Account service over a database
pub fn accounts(db: &Database) -> Accounts<UserStore> {
    let hasher = Hasher::new(&FAST_HASHING).expect("test hashing parameters are valid");
    Accounts::new(Arc::new(UserStore::new(db.get_connection())), hasher)
}

/// SQLite URL for a file inside `dir`, created on first open
pub fn file_url(dir: &std::path::Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join("users.db").display())
}
