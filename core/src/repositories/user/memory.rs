//! In-memory implementation of UserRepository, used by tests and the memory backend

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::credential::Credential;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, Credential>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with credentials
    pub fn with_users(users: impl IntoIterator<Item = Credential>) -> Self {
        let users = users
            .into_iter()
            .map(|credential| (credential.username.clone(), credential))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Insert or replace a credential
    pub async fn upsert(&self, credential: Credential) {
        let mut users = self.users.write().await;
        users.insert(credential.username.clone(), credential);
    }

    /// Remove a user, returning whether it existed
    pub async fn remove(&self, username: &str) -> bool {
        self.users.write().await.remove(username).is_some()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}
