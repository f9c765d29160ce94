//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::error_codes;

/// Standard API response envelope
///
/// Successful calls carry `code = 1000` and the payload in `results`;
/// failures carry a specific code and a message with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Numeric status code
    pub code: i32,

    /// Message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(results: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            message: None,
            results: Some(results),
        }
    }

    /// Create an error response
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            results: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.code == error_codes::SUCCESS
    }
}

impl ApiResponse<()> {
    /// Successful response without a payload
    pub fn empty() -> Self {
        Self {
            code: error_codes::SUCCESS,
            message: None,
            results: None,
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Healthy response for the given service
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }

    /// Response for a service whose revocation store is unreachable
    pub fn unhealthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            ..Self::healthy(service, version)
        }
    }
}
