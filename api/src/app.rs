//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`, so the binary
//! and the integration tests run the same routing and middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::json_error_handler;
use crate::routes::auth::{
    introspect::introspect, login::login, logout::logout, refresh::refresh, AppState,
};

use ids_core::domain::entities::Credential;
use ids_core::repositories::{InMemoryUserRepository, RevocationRepository, UserRepository};
use ids_shared::config::AuthConfig;
use ids_shared::{error_codes, ErrorResponse, HealthResponse};

const SERVICE_NAME: &str = "identity-service";

/// Create and configure the application with all dependencies
pub fn create_app<U, R>(
    app_state: web::Data<AppState<U, R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<U, R>))
        .service(
            web::scope("/auth")
                .route("/token", web::post().to(login::<U, R>))
                .route("/introspect", web::post().to(introspect::<U, R>))
                .route("/refresh", web::post().to(refresh::<U, R>))
                .route("/logout", web::post().to(logout::<U, R>)),
        )
        .default_service(web::route().to(not_found))
}

/// Credential store for the memory backend, filled from `auth.users`
pub fn memory_user_store(config: &AuthConfig) -> InMemoryUserRepository {
    InMemoryUserRepository::with_users(config.users.iter().map(Credential::from))
}

/// Health check endpoint handler
///
/// Reports 503 while the revocation store is unreachable, since every token
/// check fails closed until it returns.
async fn health_check<U, R>(state: web::Data<AppState<U, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    let version = env!("CARGO_PKG_VERSION");

    match state.auth_service.check_store().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, version)),
        Err(_) => HttpResponse::ServiceUnavailable()
            .json(HealthResponse::unhealthy(SERVICE_NAME, version)),
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::UNCATEGORIZED_EXCEPTION,
        "The requested resource was not found",
    ))
}
