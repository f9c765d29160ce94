use actix_web::{web, HttpResponse};

use crate::dto::{IntrospectRequest, IntrospectResponse};

use ids_core::repositories::{RevocationRepository, UserRepository};
use ids_shared::ApiResponse;

use super::AppState;

/// Handler for POST /auth/introspect
///
/// Always 200 for a well-formed body; invalid, expired and revoked tokens
/// report `{"valid": false}`.
pub async fn introspect<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<IntrospectRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    let result = state.auth_service.introspect(&request.token).await;
    HttpResponse::Ok().json(ApiResponse::success(IntrospectResponse::from(result)))
}
