//! Signed token encoding and verification (HS512 JWT)

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::collections::HashSet;
use tracing::{error, warn};

use crate::domain::entities::claims::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::{TokenServiceConfig, RECOMMENDED_KEY_BYTES};

const SEGMENT_COUNT: usize = 3;

/// Encodes claims into compact signed tokens and checks them back
///
/// The codec only answers "was this produced by us, intact?". Expiry and
/// revocation are checked by the caller.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
}

impl TokenCodec {
    /// Creates a codec for the configured secret
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Internal` when the signing key is empty.
    pub fn new(config: &TokenServiceConfig) -> Result<Self, DomainError> {
        if config.signing_key.is_empty() {
            return Err(DomainError::Internal {
                message: "Token signing key must not be empty".to_string(),
            });
        }

        if config.signing_key.len() < RECOMMENDED_KEY_BYTES {
            warn!(
                key_bytes = config.signing_key.len(),
                recommended = RECOMMENDED_KEY_BYTES,
                "Token signing key is shorter than recommended for HS512"
            );
        }

        let key = config.signing_key.as_bytes();

        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(key),
            decoding_key: DecodingKey::from_secret(key),
            validation,
            issuer: config.issuer.clone(),
        })
    }

    /// Issuer claim for newly built tokens
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Signs `claims` into a three-segment token
    pub fn issue(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS512), claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Checks structure and signature, then decodes the claims
    ///
    /// # Errors
    ///
    /// * `TokenError::MalformedToken` - wrong segment count, bad encoding,
    ///   unexpected header or missing claims
    /// * `TokenError::BadSignature` - signature does not match header and payload
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        check_segments(token)?;

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::MalformedToken,
            })
    }
}

fn check_segments(token: &str) -> Result<(), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != SEGMENT_COUNT {
        return Err(TokenError::MalformedToken);
    }

    for segment in segments {
        if segment.is_empty() || URL_SAFE_NO_PAD.decode(segment).is_err() {
            return Err(TokenError::MalformedToken);
        }
    }

    Ok(())
}
