//! Claims carried inside a signed session token.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Session token lifetime (1 hour), fixed for every issuance
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Claims structure for JWT payload
///
/// Timestamps are whole seconds since the Unix epoch, as JWT requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Space-joined roles (`ROLE_<name>`) and permission names
    pub scope: String,
}

impl Claims {
    /// Creates claims for a token issued at `issued_at`, expiring one hour later
    ///
    /// # Arguments
    ///
    /// * `subject` - The username the token is issued to
    /// * `issuer` - The issuer claim
    /// * `issued_at` - Issuance instant (sub-second precision is dropped)
    /// * `jti` - Unique token identifier
    /// * `scope` - Pre-formatted scope string
    pub fn new(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        jti: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: subject.into(),
            iss: issuer.into(),
            iat,
            exp: iat + TOKEN_TTL_SECONDS,
            jti: jti.into(),
            scope: scope.into(),
        }
    }

    /// Whether the token is expired at `now`
    ///
    /// The expiry instant itself counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Expiration as a timestamp, `None` if `exp` is out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Issuance as a timestamp, `None` if `iat` is out of range
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    /// Individual scope entries
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.split_whitespace()
    }
}
