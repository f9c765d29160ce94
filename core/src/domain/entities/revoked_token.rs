//! Revocation records for invalidated token IDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::claims::Claims;
use crate::errors::{DomainError, TokenError};

/// Marks a token ID as revoked until the token would have expired anyway
///
/// Records are never updated; once `expires_at` has passed they may be pruned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedTokenRecord {
    /// The revoked token's `jti`
    pub token_id: String,

    /// The revoked token's own expiry
    pub expires_at: DateTime<Utc>,
}

impl RevokedTokenRecord {
    pub fn new(token_id: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token_id: token_id.into(),
            expires_at,
        }
    }

    /// Builds the record that invalidates the token carrying `claims`
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let expires_at = claims
            .expires_at()
            .ok_or(DomainError::Token(TokenError::MalformedToken))?;
        Ok(Self::new(claims.jti.clone(), expires_at))
    }

    /// Whether the record can be deleted at `now`
    pub fn is_prunable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
