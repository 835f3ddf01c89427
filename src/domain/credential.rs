//! Credential hashing - turns plaintext passwords into stored credentials.
//!
//! Credentials are Argon2id PHC strings:
//! `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`. The algorithm identifier,
//! cost parameters and per-credential salt travel inside the string, so
//! verification needs nothing but the string itself.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashingConfig;
use crate::errors::{AppError, AppResult};

/// Argon2id credential hasher.
///
/// Holds only its cost parameters. Cloning is cheap.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.argon2.params();
        f.debug_struct("Hasher")
            .field("algorithm", &Algorithm::Argon2id.as_str())
            .field("m_cost", &params.m_cost())
            .field("t_cost", &params.t_cost())
            .field("p_cost", &params.p_cost())
            .finish()
    }
}

impl Hasher {
    /// Create a hasher with the given cost parameters.
    ///
    /// # Errors
    /// Returns a config error if Argon2 rejects the parameters
    /// (e.g. memory below `8 * parallelism` KiB).
    pub fn new(config: &HashingConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::config(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Any string is accepted, including the empty string.
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored credential.
    ///
    /// The digest comparison is constant-time. A credential that cannot be
    /// parsed, or whose embedded parameters Argon2 refuses, never matches.
    pub fn verify(&self, plaintext: &str, credential: &str) -> bool {
        let parsed = match Self::parse(credential) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Stored credential is malformed, treating as non-match");
                return false;
            }
        };

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(password_hash::Error::Password) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Stored credential has unusable parameters, treating as non-match");
                false
            }
        }
    }

    /// Parse a stored credential, checking it names an Argon2 variant and
    /// carries both salt and digest.
    pub fn parse(credential: &str) -> AppResult<PasswordHash<'_>> {
        let parsed = PasswordHash::new(credential).map_err(|_| AppError::MalformedCredential)?;

        Algorithm::try_from(parsed.algorithm).map_err(|_| AppError::MalformedCredential)?;

        if parsed.salt.is_none() || parsed.hash.is_none() {
            return Err(AppError::MalformedCredential);
        }

        Ok(parsed)
    }
}
