//! MySQL implementation of the UserRepository trait.
//!
//! Reads a user and the role graph attached to it in a single query over
//! `users`, `user_roles` and `role_permissions`. The tables belong to the
//! user management subsystem; nothing here writes to them.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ids_core::domain::entities::{Credential, RoleGraph};
use ids_core::errors::DomainError;
use ids_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get(name).map_err(|e| DomainError::Internal {
            message: format!("Failed to get {}: {}", name, e),
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        // Binary comparison keeps the lookup case-sensitive under any collation
        let query = r#"
            SELECT u.username, u.password, ur.role_name, rp.permission_name
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN role_permissions rp ON rp.role_name = ur.role_name
            WHERE BINARY u.username = ?
        "#;

        let rows = sqlx::query(query)
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup failed");
                DomainError::Internal {
                    message: format!("Failed to find user: {}", e),
                }
            })?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };

        let found_username: String = Self::column(first, "username")?;
        let password_hash: String = Self::column(first, "password")?;

        let mut roles = RoleGraph::new();
        for row in &rows {
            let role: Option<String> = Self::column(row, "role_name")?;
            let permission: Option<String> = Self::column(row, "permission_name")?;

            if let Some(role) = role {
                roles.add_role(role, permission);
            }
        }

        Ok(Some(Credential::new(found_username, password_hash, roles)))
    }
}
