//! # Infrastructure Layer
//!
//! MySQL-backed implementations of the core repository traits:
//! - **Database**: connection pool and migrations using SQLx
//! - **Revocation store**: the `invalidated_tokens` table
//! - **Credential lookup**: read-only queries over users, roles and permissions
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use ids_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
