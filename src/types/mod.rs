//! Shared types.

mod response;

pub use response::AuthResponse;
