//! Argon2id hashing and verification of share passwords.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use clawshare_core::error::AppError;

/// Hashes share passwords with Argon2id and checks candidates against them.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a share password into a PHC string with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Check `candidate` against a stored share password.
    ///
    /// Stored values that are not PHC strings predate hashing and are
    /// compared verbatim.
    pub fn verify_password(&self, candidate: &str, stored: &str) -> Result<bool, AppError> {
        let Ok(parsed) = PasswordHash::new(stored) else {
            tracing::warn!("Share password is stored unhashed; comparing verbatim");
            return Ok(candidate == stored);
        };

        match self.argon2.verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
