//! Account service - Registration, login checks and the bootstrap account.
//!
//! Hashing goes through the domain `Hasher`; persistence and the username
//! uniqueness guarantee go through `UserRepository`.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::config::DUMMY_PASSWORD;
use crate::domain::{Hasher, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user.
    ///
    /// Fails with `DuplicateUsername` if the username is taken.
    async fn create(&self, username: &str, plaintext: &str) -> AppResult<User>;

    /// Check a login attempt.
    ///
    /// Unknown user and wrong password both return `Ok(false)`; only storage
    /// failures are errors.
    async fn authenticate(&self, username: &str, plaintext: &str) -> AppResult<bool>;

    /// Create the account unless it already exists. Safe to call repeatedly.
    async fn ensure_bootstrap_user(&self, username: &str, plaintext: &str) -> AppResult<()>;
}

/// Concrete implementation of AccountService.
pub struct Accounts<R: UserRepository> {
    repo: Arc<R>,
    hasher: Hasher,
    dummy_credential: OnceCell<String>,
}

impl<R: UserRepository> Accounts<R> {
    /// Create new account service over a repository
    pub fn new(repo: Arc<R>, hasher: Hasher) -> Self {
        Self {
            repo,
            hasher,
            dummy_credential: OnceCell::new(),
        }
    }

    /// Credential verified against for unknown usernames, hashed once with
    /// the same parameters as real records.
    fn dummy_credential(&self) -> AppResult<&str> {
        self.dummy_credential
            .get_or_try_init(|| self.hasher.hash(DUMMY_PASSWORD))
            .map(String::as_str)
    }
}

#[async_trait]
impl<R: UserRepository> AccountService for Accounts<R> {
    async fn create(&self, username: &str, plaintext: &str) -> AppResult<User> {
        let credential = self.hasher.hash(plaintext)?;

        match self.repo.insert(username.to_string(), credential).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "User registered");
                Ok(user)
            }
            Err(AppError::DuplicateUsername(name)) => {
                tracing::info!(username = %name, "Registration rejected: username taken");
                Err(AppError::DuplicateUsername(name))
            }
            Err(e) => Err(e),
        }
    }

    async fn authenticate(&self, username: &str, plaintext: &str) -> AppResult<bool> {
        match self.repo.find_by_username(username).await? {
            Some(user) => Ok(self.hasher.verify(plaintext, &user.credential)),
            None => {
                // Same hashing work as the known-user path
                let dummy = self.dummy_credential()?;
                let _ = self.hasher.verify(plaintext, dummy);
                Ok(false)
            }
        }
    }

    async fn ensure_bootstrap_user(&self, username: &str, plaintext: &str) -> AppResult<()> {
        if self.repo.count_by_username(username).await? > 0 {
            tracing::debug!(username = %username, "Bootstrap user already present");
            return Ok(());
        }

        match self.create(username, plaintext).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %username, "Bootstrap user created");
                Ok(())
            }
            // Lost a race with another creator; the account exists either way
            Err(AppError::DuplicateUsername(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
