use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::domain::entities::claims::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenServiceConfig};

const SECRET: &str = "1TjXchw5FloESb63Kc+DFhTARvpWL4jUGCwfGWxuG5SIf/1y/LgJxHnMqaF6A/ij";

fn codec() -> TokenCodec {
    TokenCodec::new(&TokenServiceConfig::new(SECRET)).unwrap()
}

fn sample_claims() -> Claims {
    let issued_at = Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();
    Claims::new(
        "john",
        "devteria.com",
        issued_at,
        "0b6f1a52-5d0e-4a8e-9d59-1f6b5f1f4f1c",
        "ROLE_USER READ_DATA",
    )
}

/// Re-encodes the token with one bit of the decoded signature flipped
fn flip_signature_bit(token: &str, byte: usize, bit: u8) -> String {
    let (message, signature) = token.rsplit_once('.').unwrap();
    let mut raw = URL_SAFE_NO_PAD.decode(signature).unwrap();
    raw[byte] ^= 1 << bit;
    format!("{}.{}", message, URL_SAFE_NO_PAD.encode(raw))
}

#[test]
fn test_round_trip_returns_same_claims() {
    let codec = codec();
    let claims = sample_claims();

    let token = codec.issue(&claims).unwrap();
    let decoded = codec.verify(&token).unwrap();

    assert_eq!(decoded, claims);
}

#[test]
fn test_token_has_three_segments_and_hs512_header() {
    let token = codec().issue(&sample_claims()).unwrap();

    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3);

    let header = URL_SAFE_NO_PAD.decode(segments[0]).unwrap();
    let header: serde_json::Value = serde_json::from_slice(&header).unwrap();
    assert_eq!(header["alg"], "HS512");
}

#[test]
fn test_verify_ignores_expiry() {
    let codec = codec();
    let issued_at = Utc::now() - Duration::hours(5);
    let claims = Claims::new("john", "devteria.com", issued_at, "old-jti", "");

    let token = codec.issue(&claims).unwrap();

    assert_eq!(codec.verify(&token).unwrap(), claims);
}

#[test]
fn test_every_flipped_signature_bit_is_bad_signature() {
    let codec = codec();
    let token = codec.issue(&sample_claims()).unwrap();
    let (_, signature) = token.rsplit_once('.').unwrap();
    let signature_len = URL_SAFE_NO_PAD.decode(signature).unwrap().len();
    assert_eq!(signature_len, 64);

    for byte in 0..signature_len {
        for bit in 0..8 {
            let tampered = flip_signature_bit(&token, byte, bit);
            assert_eq!(
                codec.verify(&tampered),
                Err(TokenError::BadSignature),
                "byte {} bit {}",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_noncanonical_last_signature_character_is_malformed() {
    // 64 bytes encode to 86 characters; the last one carries 2 data bits and
    // 4 zero bits, so setting a trailing bit breaks the encoding itself
    let codec = codec();
    let token = codec.issue(&sample_claims()).unwrap();
    let (message, signature) = token.rsplit_once('.').unwrap();
    let (head, last) = signature.split_at(signature.len() - 1);
    let noncanonical = match last {
        "A" => "B",
        "Q" => "R",
        "g" => "h",
        _ => "x",
    };

    let tampered = format!("{}.{}{}", message, head, noncanonical);

    assert_eq!(codec.verify(&tampered), Err(TokenError::MalformedToken));
}

#[test]
fn test_tampered_payload_is_bad_signature() {
    let codec = codec();
    let token = codec.issue(&sample_claims()).unwrap();
    let segments: Vec<&str> = token.split('.').collect();

    let mut forged = sample_claims();
    forged.sub = "admin".to_string();
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
    let forged_token = format!("{}.{}.{}", segments[0], payload, segments[2]);

    assert_eq!(codec.verify(&forged_token), Err(TokenError::BadSignature));
}

#[test]
fn test_token_signed_with_other_key_is_bad_signature() {
    let other = TokenCodec::new(&TokenServiceConfig::new("another-secret")).unwrap();
    let token = other.issue(&sample_claims()).unwrap();

    assert_eq!(codec().verify(&token), Err(TokenError::BadSignature));
}

#[test]
fn test_wrong_segment_count_is_malformed() {
    let codec = codec();
    let token = codec.issue(&sample_claims()).unwrap();
    let (first_two, _) = token.rsplit_once('.').unwrap();

    assert_eq!(codec.verify(first_two), Err(TokenError::MalformedToken));
    assert_eq!(
        codec.verify(&format!("{}.extra", token)),
        Err(TokenError::MalformedToken)
    );
    assert_eq!(codec.verify(""), Err(TokenError::MalformedToken));
}

#[test]
fn test_invalid_encoding_is_malformed() {
    let codec = codec();
    let token = codec.issue(&sample_claims()).unwrap();
    let segments: Vec<&str> = token.split('.').collect();

    let bad_payload = format!("{}.!!not-base64!!.{}", segments[0], segments[2]);
    let empty_payload = format!("{}..{}", segments[0], segments[2]);

    assert_eq!(codec.verify(&bad_payload), Err(TokenError::MalformedToken));
    assert_eq!(codec.verify(&empty_payload), Err(TokenError::MalformedToken));
}

#[test]
fn test_missing_claim_is_malformed() {
    let codec = codec();
    let incomplete = json!({
        "sub": "john",
        "iss": "devteria.com",
        "iat": 1_710_059_400,
        "exp": 1_710_063_000,
    });
    let token = encode(
        &Header::new(Algorithm::HS512),
        &incomplete,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(codec.verify(&token), Err(TokenError::MalformedToken));
}

#[test]
fn test_other_algorithm_is_malformed() {
    let codec = codec();
    let token = encode(
        &Header::new(Algorithm::HS256),
        &sample_claims(),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(codec.verify(&token), Err(TokenError::MalformedToken));
}

#[test]
fn test_empty_signing_key_is_rejected() {
    let result = TokenCodec::new(&TokenServiceConfig::new(""));

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[test]
fn test_issuer_comes_from_config() {
    let codec = TokenCodec::new(&TokenServiceConfig::new(SECRET).with_issuer("example.org")).unwrap();
    assert_eq!(codec.issuer(), "example.org");

    assert_eq!(self::codec().issuer(), "devteria.com");
}
