//! credstore - a minimal user credential service.
//!
//! Registers users with a username and password, stores an Argon2id hash of
//! the password, and checks login attempts against it.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record and credential hasher
//! - **services**: Registration, login and bootstrap use cases
//! - **infra**: Database, migrations and the user repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (runs migrations and creates the bootstrap account)
//! cargo run -- serve
//!
//! # Run migrations only
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Hasher, User};
pub use errors::{AppError, AppResult};
pub use services::{AccountService, Accounts};
