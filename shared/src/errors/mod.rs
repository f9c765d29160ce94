//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body used when a request is rejected before reaching the service layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Numeric error code (see [`error_codes`])
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Numeric codes carried in every response envelope
pub mod error_codes {
    pub const SUCCESS: i32 = 1000;
    pub const INVALID_KEY: i32 = 1001;
    pub const USER_NOT_EXISTED: i32 = 1005;
    pub const UNAUTHENTICATED: i32 = 1006;
    pub const STORE_UNAVAILABLE: i32 = 9001;
    pub const UNCATEGORIZED_EXCEPTION: i32 = 9999;
}
