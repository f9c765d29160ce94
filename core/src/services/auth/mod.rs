//! Authentication engine
//!
//! Login, introspection, refresh and logout over signed session tokens, with
//! revocation tracked in a shared store.

mod rejection;
mod service;

#[cfg(test)]
mod tests;

pub use rejection::TokenRejection;
pub use service::AuthService;
