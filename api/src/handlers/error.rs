//! Translation of domain errors into HTTP responses
//!
//! Client denials (unknown user, bad credentials, unusable tokens) are 4xx
//! and logged at `warn`. Store outages are 503 so callers can tell them
//! apart from a rejected token. Anything else is 500.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use ids_core::errors::{AuthError, DomainError, TokenError};
use ids_shared::{error_codes, ApiResponse};

/// Status, envelope code and client-facing message for a domain error
pub fn error_parts(error: &DomainError) -> (StatusCode, i32, String) {
    match error {
        DomainError::Auth(AuthError::UserNotFound) => (
            StatusCode::NOT_FOUND,
            error_codes::USER_NOT_EXISTED,
            "User not existed".to_string(),
        ),
        DomainError::Auth(AuthError::Unauthenticated)
        | DomainError::Token(TokenError::MalformedToken)
        | DomainError::Token(TokenError::BadSignature) => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHENTICATED,
            "Unauthenticated".to_string(),
        ),
        DomainError::StoreUnavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::STORE_UNAVAILABLE,
            "Service temporarily unavailable".to_string(),
        ),
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_KEY,
            message.clone(),
        ),
        DomainError::Token(TokenError::TokenGenerationFailed) | DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::UNCATEGORIZED_EXCEPTION,
            "Uncategorized exception".to_string(),
        ),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = error_parts(error);

    if status.is_server_error() {
        tracing::error!(error = %error, code, "Request failed");
    } else {
        tracing::warn!(error = %error, code, "Request denied");
    }

    HttpResponse::build(status).json(ApiResponse::<()>::error(code, message))
}

/// 400 response for a request body that failed field validation
pub fn handle_validation_error(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort_unstable();
    let message = format!("Invalid fields: {}", fields.join(", "));

    tracing::warn!(%message, "Request validation failed");

    HttpResponse::BadRequest().json(ApiResponse::<()>::error(error_codes::INVALID_KEY, message))
}

/// Error handler for `web::JsonConfig`: malformed or mistyped bodies become 400 envelopes
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error = %err, "Rejected request body");

    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(
        error_codes::INVALID_KEY,
        format!("Invalid request body: {}", err),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_denials_map_to_4xx() {
        let cases = [
            (DomainError::Auth(AuthError::UserNotFound), 404, 1005),
            (DomainError::Auth(AuthError::Unauthenticated), 401, 1006),
            (DomainError::Token(TokenError::MalformedToken), 401, 1006),
            (DomainError::Token(TokenError::BadSignature), 401, 1006),
            (
                DomainError::Validation {
                    message: "bad".to_string(),
                },
                400,
                1001,
            ),
        ];

        for (error, status, code) in cases {
            let (actual_status, actual_code, _) = error_parts(&error);
            assert_eq!(actual_status.as_u16(), status, "{:?}", error);
            assert_eq!(actual_code, code, "{:?}", error);
        }
    }

    #[test]
    fn test_server_faults_map_to_5xx() {
        let (status, code, _) = error_parts(&DomainError::store_unavailable("down"));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, 9001);

        let (status, code, message) = error_parts(&DomainError::Internal {
            message: "secret detail".to_string(),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, 9999);
        assert!(!message.contains("secret detail"));

        let (status, _, _) = error_parts(&DomainError::Token(TokenError::TokenGenerationFailed));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
