//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::Hasher;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{AccountService, Accounts};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub accounts: Arc<dyn AccountService>,
    /// Database handle, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the account service over the database using configured hashing costs.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let hasher = Hasher::new(&config.hashing)?;
        let repo = Arc::new(UserStore::new(database.get_connection()));

        Ok(Self {
            accounts: Arc::new(Accounts::new(repo, hasher)),
            database,
        })
    }
}
