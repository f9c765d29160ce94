//! Token signing and revocation configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
///
/// The signing algorithm is fixed to HS512 and the key is read once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify tokens
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Override the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Periodic pruning of expired revocation records
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Whether the background pruning task runs
    pub enabled: bool,

    /// How often to prune, in seconds
    pub interval_seconds: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 3600,
        }
    }
}

/// A role and the permissions it grants, as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedRoleConfig {
    pub name: String,

    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A user loaded into the in-memory credential store at startup
///
/// ```toml
/// [[auth.users]]
/// username = "john"
/// password_hash = "$2b$10$..."
/// roles = [{ name = "USER", permissions = ["READ_DATA"] }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedUserConfig {
    pub username: String,

    /// bcrypt hash; plaintext passwords never appear in configuration
    pub password_hash: String,

    #[serde(default)]
    pub roles: Vec<SeedRoleConfig>,
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Revocation cleanup configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,

    /// Users for the memory backend; ignored when credentials come from MySQL
    #[serde(default)]
    pub users: Vec<SeedUserConfig>,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SIGNER_KEY")
            .or_else(|_| std::env::var("JWT_SECRET"))
            .unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| default_issuer());
        let interval_seconds = std::env::var("REVOCATION_CLEANUP_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);
        let enabled = std::env::var("REVOCATION_CLEANUP_ENABLED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            jwt: JwtConfig { secret, issuer },
            cleanup: CleanupConfig {
                enabled,
                interval_seconds,
            },
            users: Vec::new(),
        }
    }
}

fn default_issuer() -> String {
    String::from("devteria.com")
}
