//! In-memory implementation of RevocationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::revoked_token::RevokedTokenRecord;
use crate::errors::DomainError;

use super::r#trait::RevocationRepository;

/// Process-local revocation store
///
/// Inserts happen under the write lock, so a completed `revoke` is visible to
/// every later `is_revoked`.
#[derive(Clone)]
pub struct InMemoryRevocationRepository {
    records: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl InMemoryRevocationRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for InMemoryRevocationRepository {
    async fn is_revoked(&self, token_id: &str) -> Result<bool, DomainError> {
        let records = self.records.read().await;
        Ok(records.contains_key(token_id))
    }

    async fn revoke(&self, record: RevokedTokenRecord) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.entry(record.token_id) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(record.expires_at);
                Ok(true)
            }
        }
    }

    async fn prune(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();

        records.retain(|_, expires_at| *expires_at >= now);

        Ok(initial_count - records.len())
    }
}
