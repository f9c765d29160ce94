use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{AuthenticationResponse, RefreshRequest};
use crate::handlers::{handle_domain_error, handle_validation_error};

use ids_core::repositories::{RevocationRepository, UserRepository};
use ids_shared::ApiResponse;

use super::AppState;

/// Handler for POST /auth/refresh
///
/// Revokes the presented token and returns a new one carrying the user's
/// current roles. Each token can be refreshed once.
///
/// ## Errors
/// - 400 Bad Request: Empty token
/// - 401 Unauthorized: Token invalid, expired, already used, or its user was removed
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn refresh<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state.auth_service.refresh(&request.token).await {
        Ok(response) => {
            HttpResponse::Ok().json(ApiResponse::success(AuthenticationResponse::from(response)))
        }
        Err(error) => handle_domain_error(&error),
    }
}
