//! Racing refresh and logout calls on the same token

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};

use super::mocks::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_refreshes_issue_exactly_one_token() {
    let ctx = context();
    let token = ctx.service.login("john", "password123").await.unwrap().token;

    let (first, second) = tokio::join!(ctx.service.refresh(&token), ctx.service.refresh(&token));

    let outcomes = [first, second];
    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(outcomes
        .iter()
        .any(|r| *r == Err(DomainError::Auth(AuthError::Unauthenticated))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_spawned_refreshes_issue_exactly_one_token() {
    let ctx = Arc::new(context());
    let token = ctx.service.login("john", "password123").await.unwrap().token;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ctx = ctx.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move { ctx.service.refresh(&token).await }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => assert_eq!(e, DomainError::Auth(AuthError::Unauthenticated)),
        }
    }

    assert_eq!(successes, 1);
    assert!(!ctx.service.introspect(&token).await.valid);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_logout_racing_refresh_has_one_winner() {
    let ctx = context();
    let token = ctx.service.login("john", "password123").await.unwrap().token;

    let (refreshed, logged_out) =
        tokio::join!(ctx.service.refresh(&token), ctx.service.logout(&token));

    assert_ne!(refreshed.is_ok(), logged_out.is_ok());
    assert!(!ctx.service.introspect(&token).await.valid);
}
