use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::LogoutRequest;
use crate::handlers::{handle_domain_error, handle_validation_error};

use ids_core::repositories::{RevocationRepository, UserRepository};
use ids_shared::ApiResponse;

use super::AppState;

/// Handler for POST /auth/logout
///
/// Revokes the presented token. Logging out a token that is already invalid
/// is a 401, not a silent success.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "code": 1000 }
/// ```
pub async fn logout<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state.auth_service.logout(&request.token).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::empty()),
        Err(error) => handle_domain_error(&error),
    }
}
