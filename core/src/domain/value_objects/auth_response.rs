//! Results of the authentication operations.

use serde::{Deserialize, Serialize};

/// Returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,

    /// Always `true` when a token was issued
    pub authenticated: bool,
}

impl AuthResponse {
    /// Response for a freshly issued token
    pub fn authenticated(token: String) -> Self {
        Self {
            token,
            authenticated: true,
        }
    }
}

/// Returned by introspection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntrospectResponse {
    pub valid: bool,
}

impl IntrospectResponse {
    pub fn valid() -> Self {
        Self { valid: true }
    }

    pub fn invalid() -> Self {
        Self { valid: false }
    }
}
