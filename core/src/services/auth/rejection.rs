//! Reasons a presented token fails verification

use thiserror::Error;

use crate::errors::{AuthError, DomainError, TokenError};

/// Why `verify_token` refused a token
///
/// Introspection collapses every variant into `{valid: false}`. Logout and
/// refresh convert through `From<TokenRejection> for DomainError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("Malformed token")]
    Malformed,

    #[error("Bad signature")]
    BadSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,

    /// Revocation state could not be read, so the token is not verifiable
    #[error("Revocation store unavailable: {0}")]
    StoreUnavailable(String),
}

impl TokenRejection {
    /// Short label for log fields
    pub fn reason(&self) -> &'static str {
        match self {
            TokenRejection::Malformed => "malformed",
            TokenRejection::BadSignature => "bad_signature",
            TokenRejection::Expired => "expired",
            TokenRejection::Revoked => "revoked",
            TokenRejection::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl From<TokenError> for TokenRejection {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::BadSignature => TokenRejection::BadSignature,
            TokenError::MalformedToken | TokenError::TokenGenerationFailed => {
                TokenRejection::Malformed
            }
        }
    }
}

impl From<TokenRejection> for DomainError {
    fn from(rejection: TokenRejection) -> Self {
        match rejection {
            TokenRejection::StoreUnavailable(message) => DomainError::StoreUnavailable { message },
            _ => DomainError::Auth(AuthError::Unauthenticated),
        }
    }
}
