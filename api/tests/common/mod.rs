//! Shared setup for HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use ids_api::routes::auth::AppState;
use ids_core::domain::entities::{Credential, RevokedTokenRecord, RoleGraph};
use ids_core::errors::DomainError;
use ids_core::repositories::{
    InMemoryRevocationRepository, InMemoryUserRepository, RevocationRepository,
};
use ids_core::services::{
    hash_password, AuthService, BcryptPasswordVerifier, FixedClock, TokenCodec, TokenServiceConfig,
};

pub const TEST_SECRET: &str = "1TjXchw5FloESb63Kc+DFhTARvpWL4jUGCwfGWxuG5SIf/1y/LgJxHnMqaF6A/ij";

/// Revocation store whose every call fails
pub struct UnavailableRevocationRepository;

#[async_trait]
impl RevocationRepository for UnavailableRevocationRepository {
    async fn is_revoked(&self, _token_id: &str) -> Result<bool, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn revoke(&self, _record: RevokedTokenRecord) -> Result<bool, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn prune(&self, _now: DateTime<Utc>) -> Result<usize, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }
}

pub struct TestContext<R: RevocationRepository> {
    pub state: web::Data<AppState<InMemoryUserRepository, R>>,
    pub users: Arc<InMemoryUserRepository>,
    pub clock: Arc<FixedClock>,
    pub codec: TokenCodec,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 9, 0, 0).unwrap()
}

pub fn john() -> Credential {
    Credential::new(
        "john",
        hash_password("password123", 4).unwrap(),
        RoleGraph::new().with_role("USER", ["READ_DATA"]),
    )
}

pub fn context_with<R: RevocationRepository + 'static>(revocations: Arc<R>) -> TestContext<R> {
    let users = Arc::new(InMemoryUserRepository::with_users([john()]));
    let clock = Arc::new(FixedClock::new(start_time()));
    let codec = TokenCodec::new(&TokenServiceConfig::new(TEST_SECRET)).unwrap();

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        revocations,
        codec.clone(),
        Arc::new(BcryptPasswordVerifier),
        clock.clone(),
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service)),
        users,
        clock,
        codec,
    }
}

pub fn context() -> TestContext<InMemoryRevocationRepository> {
    context_with(Arc::new(InMemoryRevocationRepository::new()))
}
