//! Domain entities representing core business objects.

pub mod claims;
pub mod credential;
pub mod revoked_token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use claims::{Claims, TOKEN_TTL_SECONDS};
pub use credential::{Credential, RoleGraph};
pub use revoked_token::RevokedTokenRecord;
