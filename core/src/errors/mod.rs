//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The revocation store could not be reached; callers must fail closed
    #[error("Revocation store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a revocation store failure
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        DomainError::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Whether this error denies the caller rather than signalling a server fault
    pub fn is_client_denial(&self) -> bool {
        matches!(
            self,
            DomainError::Auth(_)
                | DomainError::Validation { .. }
                | DomainError::Token(TokenError::MalformedToken)
                | DomainError::Token(TokenError::BadSignature)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
