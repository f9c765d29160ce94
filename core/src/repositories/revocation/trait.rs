//! Revocation store trait defining the interface for invalidated token IDs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::revoked_token::RevokedTokenRecord;
use crate::errors::DomainError;

/// Repository trait for the set of revoked token IDs
///
/// Implementations must give read-after-write consistency: once `revoke`
/// returns, every subsequent `is_revoked` for that ID, from any caller,
/// returns `true`. Revocation is monotonic; only `prune` ever deletes, and
/// only records whose token has already expired.
///
/// Backend I/O failures are reported as [`DomainError::StoreUnavailable`].
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Check whether a token ID has been revoked
    ///
    /// # Arguments
    /// * `token_id` - The `jti` claim of the token
    ///
    /// # Returns
    /// * `Ok(true)` - The ID is revoked
    /// * `Ok(false)` - No record exists
    /// * `Err(DomainError)` - The store could not be queried
    async fn is_revoked(&self, token_id: &str) -> Result<bool, DomainError>;

    /// Record a token ID as revoked
    ///
    /// Re-revoking an existing ID is a no-op, not an error. The return value
    /// tells concurrent callers apart: exactly one caller observes `true`
    /// for a given ID.
    ///
    /// # Arguments
    /// * `record` - The token ID and its expiry
    ///
    /// # Returns
    /// * `Ok(true)` - This call inserted the record
    /// * `Ok(false)` - The ID was already revoked
    /// * `Err(DomainError)` - The store could not be written
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::{Duration, Utc};
    /// # use ids_core::repositories::RevocationRepository;
    /// # use ids_core::domain::entities::RevokedTokenRecord;
    /// # async fn example(repo: &impl RevocationRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = RevokedTokenRecord::new("5f0c6d8e", Utc::now() + Duration::hours(1));
    ///
    /// if repo.revoke(record).await? {
    ///     println!("Token revoked");
    /// } else {
    ///     println!("Token was already revoked");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn revoke(&self, record: RevokedTokenRecord) -> Result<bool, DomainError>;

    /// Delete records whose `expires_at` is before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn prune(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Confirm the store can currently be reached
    ///
    /// Stores with nothing to lose contact with keep the default.
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
