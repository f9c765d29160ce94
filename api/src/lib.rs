//! HTTP surface of the identity service
//!
//! Thin boundary over `ids_core::services::AuthService`: request binding and
//! validation, the `{code, message, results}` envelope, and error-to-status
//! mapping.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;
