//! Request and response bodies for the HTTP API

pub mod auth;

pub use auth::{
    AuthenticationRequest, AuthenticationResponse, IntrospectRequest, IntrospectResponse,
    LogoutRequest, RefreshRequest,
};
