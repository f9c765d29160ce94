use serde::{Deserialize, Serialize};
use validator::Validate;

use ids_core::domain::value_objects;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthenticationRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Introspection accepts any string; an empty token is simply invalid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    pub token: String,
    pub authenticated: bool,
}

impl From<value_objects::AuthResponse> for AuthenticationResponse {
    fn from(response: value_objects::AuthResponse) -> Self {
        Self {
            token: response.token,
            authenticated: response.authenticated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectResponse {
    pub valid: bool,
}

impl From<value_objects::IntrospectResponse> for IntrospectResponse {
    fn from(response: value_objects::IntrospectResponse) -> Self {
        Self {
            valid: response.valid,
        }
    }
}
