//! Token signing, verification and revocation maintenance
//!
//! - HS512 codec for compact signed tokens
//! - Signing configuration
//! - Background pruning of expired revocation records

mod cleanup;
mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use cleanup::{CleanupResult, RevocationCleanupConfig, RevocationCleanupService};
pub use codec::TokenCodec;
pub use config::{TokenServiceConfig, DEFAULT_ISSUER, RECOMMENDED_KEY_BYTES};
