//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, TokenRejection};
pub use clock::{Clock, FixedClock, SystemClock};
pub use password::{hash_password, BcryptPasswordVerifier, PasswordVerifier, DEFAULT_HASH_COST};
pub use token::{
    CleanupResult, RevocationCleanupConfig, RevocationCleanupService, TokenCodec,
    TokenServiceConfig,
};
