//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_BOOTSTRAP_USERNAME, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL,
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEV_BOOTSTRAP_PASSWORD,
};
use crate::errors::{AppError, AppResult};

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub bootstrap_username: String,
    bootstrap_password: String,
    pub hashing: HashingConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("database_max_connections", &self.database_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("bootstrap_username", &self.bootstrap_username)
            .field("bootstrap_password", &"[REDACTED]")
            .field("hashing", &self.hashing)
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    ///
    /// # Errors
    /// Returns a config error if `BOOTSTRAP_PASSWORD` is missing in a release
    /// build, or if a numeric variable does not parse.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let bootstrap_password = match env::var("BOOTSTRAP_PASSWORD") {
            Ok(password) => password,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("BOOTSTRAP_PASSWORD not set, using insecure default for development");
                DEV_BOOTSTRAP_PASSWORD.to_string()
            }
            Err(_) => {
                return Err(AppError::config(
                    "BOOTSTRAP_PASSWORD environment variable must be set in production",
                ))
            }
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            bootstrap_username: env::var("BOOTSTRAP_USERNAME")
                .unwrap_or_else(|_| DEFAULT_BOOTSTRAP_USERNAME.to_string()),
            bootstrap_password,
            hashing: HashingConfig {
                memory_kib: parse_var("HASH_MEMORY_KIB", DEFAULT_HASH_MEMORY_KIB)?,
                iterations: parse_var("HASH_ITERATIONS", DEFAULT_HASH_ITERATIONS)?,
                parallelism: parse_var("HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM)?,
            },
        })
    }

    /// Build a configuration for an explicit database, with default everything else.
    pub fn for_database(database_url: impl Into<String>, bootstrap_password: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            bootstrap_username: DEFAULT_BOOTSTRAP_USERNAME.to_string(),
            bootstrap_password: bootstrap_password.into(),
            hashing: HashingConfig::default(),
        }
    }

    /// Password for the bootstrap account.
    pub fn bootstrap_password(&self) -> &str {
        &self.bootstrap_password
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Read an optional variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_bootstrap_password() {
        let config = Config::for_database("sqlite::memory:", "hunter2-secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("hunter2-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(config.bootstrap_password(), "hunter2-secret");
    }

    #[test]
    fn test_server_addr() {
        let mut config = Config::for_database("sqlite::memory:", "pw");
        config.server_host = "127.0.0.1".to_string();
        config.server_port = 8080;
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_var_defaults_and_rejects_garbage() {
        assert_eq!(parse_var("CREDSTORE_TEST_UNSET_VAR", 7u32).unwrap(), 7);

        std::env::set_var("CREDSTORE_TEST_BAD_PORT", "not-a-port");
        let result = parse_var::<u16>("CREDSTORE_TEST_BAD_PORT", 1);
        std::env::remove_var("CREDSTORE_TEST_BAD_PORT");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_hashing_defaults_match_argon2() {
        let hashing = HashingConfig::default();
        assert_eq!(hashing.memory_kib, 19456);
        assert_eq!(hashing.iterations, 2);
        assert_eq!(hashing.parallelism, 1);
    }
}
