//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and revocation cleanup configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `logging` - Log level and output format
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, CleanupConfig, JwtConfig, SeedRoleConfig, SeedUserConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 8080),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::new("mysql://identity-db:3306/identity_service")
                .with_backend(StorageBackend::MySql)
                .with_max_connections(50),
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };
        config.auth = AuthConfig::from_env();
        config.database = DatabaseConfig::from_env();
        config.server = ServerConfig::from_env();
        config
    }

    /// Check settings that must never reach production with their defaults
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt.secret.is_empty() {
            return Err("auth.jwt.secret must not be empty".to_string());
        }
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("auth.jwt.secret must be set in production".to_string());
        }
        if let Some(user) = self
            .auth
            .users
            .iter()
            .find(|user| user.username.is_empty() || user.password_hash.is_empty())
        {
            return Err(format!(
                "auth.users entry '{}' needs both a username and a password_hash",
                user.username
            ));
        }
        if self.database.backend == StorageBackend::MySql && self.database.url.is_empty() {
            return Err("database.url is required for the mysql backend".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let mut config = AppConfig::production();
        config.auth.jwt = JwtConfig::default();
        assert!(config.validate().is_err());

        config.auth.jwt = JwtConfig::new("a-real-production-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let mut config = AppConfig::development();
        config.auth.jwt.secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_user_without_hash_is_rejected() {
        let mut config = AppConfig::development();
        config.auth.users.push(SeedUserConfig {
            username: "john".to_string(),
            password_hash: String::new(),
            roles: Vec::new(),
        });

        let error = config.validate().unwrap_err();
        assert!(error.contains("john"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = serde_json::json!({
            "environment": "staging",
            "auth": { "jwt": { "secret": "from-file" } }
        });
        let config: AppConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.auth.jwt.secret, "from-file");
        assert_eq!(config.auth.jwt.issuer, "devteria.com");
        assert_eq!(config.server.port, 8080);
    }
}
