//! Password hash verification backed by bcrypt

use tracing::error;

use crate::errors::DomainError;

/// Work factor used when hashing new passwords
pub const DEFAULT_HASH_COST: u32 = 10;

/// Checks a plaintext password against a stored hash
pub trait PasswordVerifier: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(DomainError::Internal)` - The stored hash is unusable
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, DomainError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptPasswordVerifier;

impl PasswordVerifier for BcryptPasswordVerifier {
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plain, hash).map_err(|e| {
            error!(error = %e, "Stored password hash could not be parsed");
            DomainError::Internal {
                message: format!("Invalid password hash: {}", e),
            }
        })
    }
}

/// Hash a password for storage
pub fn hash_password(plain: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(plain, cost).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}
