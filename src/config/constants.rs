//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5001;

// =============================================================================
// Database
// =============================================================================

/// Default database URL: SQLite file in the working directory, created on first run
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// Bootstrap Account
// =============================================================================

/// Username of the administrative account created at startup
pub const DEFAULT_BOOTSTRAP_USERNAME: &str = "ADMIN";

/// Development-only bootstrap password, refused in release builds
pub const DEV_BOOTSTRAP_PASSWORD: &str = "password";

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = argon2::Params::DEFAULT_M_COST;

/// Number of passes over memory
pub const DEFAULT_HASH_ITERATIONS: u32 = argon2::Params::DEFAULT_T_COST;

/// Degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = argon2::Params::DEFAULT_P_COST;

/// Plaintext verified against when a username is unknown, so both paths hash
pub const DUMMY_PASSWORD: &str = "credstore-dummy-password";
