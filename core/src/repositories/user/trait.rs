//! User store trait. The store is owned by another subsystem; this service only reads it.

use async_trait::async_trait;

use crate::domain::entities::credential::Credential;
use crate::errors::DomainError;

/// Read-only lookup of login credentials and role assignments
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a credential by exact, case-sensitive username
    ///
    /// # Returns
    /// * `Ok(Some(Credential))` - User found, with current roles
    /// * `Ok(None)` - No such user
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError>;
}
