use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::claims::Claims;
use crate::domain::entities::revoked_token::RevokedTokenRecord;
use crate::errors::{DomainError, TokenError};

#[test]
fn test_record_from_claims_keeps_token_expiry() {
    let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let claims = Claims::new("john", "devteria.com", issued, "abc", "");

    let record = RevokedTokenRecord::from_claims(&claims).unwrap();
    assert_eq!(record.token_id, "abc");
    assert_eq!(record.expires_at, issued + Duration::hours(1));
}

#[test]
fn test_record_from_out_of_range_expiry_is_rejected() {
    let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut claims = Claims::new("john", "devteria.com", issued, "abc", "");
    claims.exp = i64::MAX;

    assert_eq!(
        RevokedTokenRecord::from_claims(&claims),
        Err(DomainError::Token(TokenError::MalformedToken))
    );
}

#[test]
fn test_prunable_only_after_expiry() {
    let expires = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();
    let record = RevokedTokenRecord::new("abc", expires);

    assert!(!record.is_prunable_at(expires - Duration::seconds(1)));
    assert!(!record.is_prunable_at(expires));
    assert!(record.is_prunable_at(expires + Duration::seconds(1)));
}
