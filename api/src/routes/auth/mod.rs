//! Authentication route handlers
//!
//! - Login (`/auth/token`)
//! - Token introspection
//! - Token refresh
//! - Logout

pub mod introspect;
pub mod login;
pub mod logout;
pub mod refresh;

use std::sync::Arc;

use ids_core::repositories::{RevocationRepository, UserRepository};
use ids_core::services::AuthService;

/// Application state shared across handlers
pub struct AppState<U, R>
where
    U: UserRepository,
    R: RevocationRepository,
{
    pub auth_service: Arc<AuthService<U, R>>,
}

impl<U, R> AppState<U, R>
where
    U: UserRepository,
    R: RevocationRepository,
{
    pub fn new(auth_service: Arc<AuthService<U, R>>) -> Self {
        Self { auth_service }
    }
}
