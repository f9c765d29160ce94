//! Configuration for the token codec

use ids_shared::config::JwtConfig;

/// Issuer placed in every token unless configured otherwise
pub const DEFAULT_ISSUER: &str = "devteria.com";

/// Keys shorter than the HS512 block size are accepted but logged
pub const RECOMMENDED_KEY_BYTES: usize = 64;

/// Signing configuration, fixed for the lifetime of the process
///
/// The algorithm is always HS512.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC secret
    pub signing_key: String,
    /// Issuer claim
    pub issuer: String,
}

impl TokenServiceConfig {
    pub fn new(signing_key: impl Into<String>) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        JwtConfig::default().into()
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            signing_key: config.secret.clone(),
            issuer: config.issuer.clone(),
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            signing_key: config.secret,
            issuer: config.issuer,
        }
    }
}
