//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::entities::{Claims, Credential, RevokedTokenRecord};
use crate::domain::value_objects::{AuthResponse, IntrospectResponse};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RevocationRepository, UserRepository};
use crate::services::clock::Clock;
use crate::services::password::PasswordVerifier;
use crate::services::token::TokenCodec;

use super::rejection::TokenRejection;

/// Fresh token IDs tried before issuance gives up
const MAX_TOKEN_ID_ATTEMPTS: usize = 3;

/// Authentication service orchestrating login, introspection, refresh and logout
///
/// The revocation store is the only state shared between requests. Every
/// other collaborator is read-only or stateless.
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: RevocationRepository,
{
    /// External user store, read-only
    user_repository: Arc<U>,
    /// Set of revoked token IDs
    revocation_repository: Arc<R>,
    /// Signs and checks tokens
    codec: TokenCodec,
    /// Password hash check
    password_verifier: Arc<dyn PasswordVerifier>,
    /// Time source for issuance and expiry
    clock: Arc<dyn Clock>,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: RevocationRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Credential lookup
    /// * `revocation_repository` - Revoked token IDs
    /// * `codec` - Token codec holding the signing key
    /// * `password_verifier` - Password hash verification
    /// * `clock` - Source of the current time
    pub fn new(
        user_repository: Arc<U>,
        revocation_repository: Arc<R>,
        codec: TokenCodec,
        password_verifier: Arc<dyn PasswordVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repository,
            revocation_repository,
            codec,
            password_verifier,
            clock,
        }
    }

    /// Authenticate with username and password and issue a token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token valid for one hour
    /// * `Err(AuthError::UserNotFound)` - No such username
    /// * `Err(AuthError::Unauthenticated)` - Password mismatch
    /// * `Err(DomainError::StoreUnavailable)` - Token ID could not be checked
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ids_core::repositories::{InMemoryRevocationRepository, InMemoryUserRepository};
    /// # use ids_core::services::AuthService;
    /// # async fn example(service: &AuthService<InMemoryUserRepository, InMemoryRevocationRepository>) {
    /// match service.login("john", "password123").await {
    ///     Ok(response) => println!("Token: {}", response.token),
    ///     Err(e) => eprintln!("Login failed: {}", e),
    /// }
    /// # }
    /// ```
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        let credential = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                info!(username = %username, "Login rejected: unknown user");
                AuthError::UserNotFound
            })?;

        if !self
            .password_verifier
            .verify(password, &credential.password_hash)?
        {
            warn!(username = %username, "Login rejected: password mismatch");
            return Err(AuthError::Unauthenticated.into());
        }

        let token = self.issue_token(&credential).await?;
        info!(subject = %credential.username, "Issued token on login");

        Ok(AuthResponse::authenticated(token))
    }

    /// Whether the revocation store answers, for readiness reporting
    pub async fn check_store(&self) -> DomainResult<()> {
        self.revocation_repository.ping().await.map_err(|e| {
            warn!(error = %e, "Revocation store failed its health check");
            e
        })
    }

    /// Report whether a token currently authenticates
    ///
    /// Never fails; every rejection, including an unreachable revocation
    /// store, reports `valid: false`.
    pub async fn introspect(&self, token: &str) -> IntrospectResponse {
        match self.verify_token(token).await {
            Ok(claims) => {
                debug!(subject = %claims.sub, jti = %claims.jti, "Introspected valid token");
                IntrospectResponse::valid()
            }
            Err(rejection) => {
                debug!(reason = rejection.reason(), "Introspected invalid token");
                IntrospectResponse::invalid()
            }
        }
    }

    /// Exchange a valid token for a new one, revoking the old
    ///
    /// The new token's scope comes from the user's current roles, not the
    /// presented token. A token can be refreshed at most once, even when
    /// several refreshes race.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The replacement token
    /// * `Err(AuthError::Unauthenticated)` - Token invalid, already used, or its user is gone
    /// * `Err(DomainError::StoreUnavailable)` - Revocation store failure
    pub async fn refresh(&self, token: &str) -> DomainResult<AuthResponse> {
        let claims = self.verify_for_use(token, "refresh").await?;

        self.revoke_claims(&claims).await?;

        let credential = self
            .user_repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(subject = %claims.sub, "Refresh rejected: user no longer exists");
                AuthError::Unauthenticated
            })?;

        let new_token = self.issue_token(&credential).await?;
        info!(subject = %claims.sub, revoked_jti = %claims.jti, "Refreshed token");

        Ok(AuthResponse::authenticated(new_token))
    }

    /// Revoke a valid token
    ///
    /// Logging out an invalid, expired or already revoked token is an error.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        let claims = self.verify_for_use(token, "logout").await?;

        self.revoke_claims(&claims).await?;
        info!(subject = %claims.sub, jti = %claims.jti, "Logged out token");

        Ok(())
    }

    /// Verify signature, expiry and revocation state
    ///
    /// A token is accepted only when its signature verifies, the current time
    /// is before `exp`, and its `jti` is not revoked.
    pub async fn verify_token(&self, token: &str) -> Result<Claims, TokenRejection> {
        let claims = self.codec.verify(token)?;

        if claims.expires_at().is_none() {
            return Err(TokenRejection::Malformed);
        }

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenRejection::Expired);
        }

        match self.revocation_repository.is_revoked(&claims.jti).await {
            Ok(true) => Err(TokenRejection::Revoked),
            Ok(false) => Ok(claims),
            Err(e) => {
                error!(jti = %claims.jti, error = %e, "Revocation lookup failed");
                Err(TokenRejection::StoreUnavailable(e.to_string()))
            }
        }
    }

    async fn verify_for_use(&self, token: &str, operation: &'static str) -> DomainResult<Claims> {
        self.verify_token(token).await.map_err(|rejection| {
            info!(operation, reason = rejection.reason(), "Token rejected");
            DomainError::from(rejection)
        })
    }

    /// Record the token as revoked; losing a race to another caller counts as a rejection
    async fn revoke_claims(&self, claims: &Claims) -> DomainResult<()> {
        let record = RevokedTokenRecord::from_claims(claims)?;

        if !self.revocation_repository.revoke(record).await? {
            warn!(jti = %claims.jti, "Token was revoked by a concurrent request");
            return Err(AuthError::Unauthenticated.into());
        }

        Ok(())
    }

    async fn issue_token(&self, credential: &Credential) -> DomainResult<String> {
        let token_id = self.fresh_token_id().await?;
        let claims = Claims::new(
            credential.username.as_str(),
            self.codec.issuer(),
            self.clock.now(),
            token_id,
            credential.scope(),
        );

        self.codec.issue(&claims)
    }

    async fn fresh_token_id(&self) -> DomainResult<String> {
        for attempt in 1..=MAX_TOKEN_ID_ATTEMPTS {
            let candidate = Uuid::new_v4().to_string();
            if !self.revocation_repository.is_revoked(&candidate).await? {
                return Ok(candidate);
            }
            warn!(attempt, "Generated token ID collides with a revoked token");
        }

        error!(
            attempts = MAX_TOKEN_ID_ATTEMPTS,
            "Could not generate a unique token ID"
        );
        Err(TokenError::TokenGenerationFailed.into())
    }
}
