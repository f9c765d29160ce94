//! MySQL implementation of the RevocationRepository trait.
//!
//! Revoked token IDs live in `invalidated_tokens`. The primary key on `id`
//! makes `INSERT IGNORE` an atomic insert-if-absent, so concurrent revokes of
//! the same ID see exactly one inserted row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use ids_core::domain::entities::RevokedTokenRecord;
use ids_core::errors::DomainError;
use ids_core::repositories::RevocationRepository;

/// MySQL implementation of RevocationRepository
pub struct MySqlRevocationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevocationRepository {
    /// Create a new MySQL revocation repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn unavailable(action: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "Revocation store failed to {}", action);
    DomainError::store_unavailable(format!("Failed to {}: {}", action, e))
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn is_revoked(&self, token_id: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM invalidated_tokens WHERE id = ?)";

        let exists: i64 = sqlx::query_scalar(query)
            .bind(token_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unavailable("check token revocation", e))?;

        Ok(exists == 1)
    }

    async fn revoke(&self, record: RevokedTokenRecord) -> Result<bool, DomainError> {
        let query = "INSERT IGNORE INTO invalidated_tokens (id, expiry_time) VALUES (?, ?)";

        let result = sqlx::query(query)
            .bind(&record.token_id)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| unavailable("revoke token", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn prune(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let query = "DELETE FROM invalidated_tokens WHERE expiry_time < ?";

        let result = sqlx::query(query)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| unavailable("prune revocation records", e))?;

        Ok(result.rows_affected() as usize)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unavailable("answer a ping", e))?;

        Ok(())
    }
}
