//! Domain layer - Core business entities and logic
//!
//! Contains the user record and the credential hasher. Nothing here talks to
//! storage or HTTP.

pub mod credential;
pub mod user;

pub use credential::Hasher;
pub use user::User;
