//! Error types for authentication and token handling
//!
//! Messages here are for logs; the HTTP layer maps each variant to its own
//! client-facing code.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    /// Bad password, or a token that is malformed, forged, expired or revoked
    #[error("Unauthenticated")]
    Unauthenticated,
}

/// Token codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Bad signature")]
    BadSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
