//! Shared configuration and wire types for the identity service
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (auth, database, server, environment/logging)
//! - Error response structures and error codes
//! - The API response envelope

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    SeedRoleConfig, SeedUserConfig, ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse};
