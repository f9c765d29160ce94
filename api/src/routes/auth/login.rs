use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{AuthenticationRequest, AuthenticationResponse};
use crate::handlers::{handle_domain_error, handle_validation_error};

use ids_core::repositories::{RevocationRepository, UserRepository};
use ids_shared::ApiResponse;

use super::AppState;

/// Handler for POST /auth/token
///
/// Exchanges a username and password for a signed token valid for one hour.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "john",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "code": 1000,
///     "results": { "token": "eyJ...", "authenticated": true }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty username or password
/// - 401 Unauthorized: Wrong password
/// - 404 Not Found: Unknown username
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn login<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<AuthenticationRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => {
            HttpResponse::Ok().json(ApiResponse::success(AuthenticationResponse::from(response)))
        }
        Err(error) => handle_domain_error(&error),
    }
}
