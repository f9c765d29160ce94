//! Integration tests for the introspection endpoint

mod common;

use std::sync::Arc;

use actix_web::{test, web};
use chrono::Duration;
use serde_json::{json, Value};

use ids_api::app::create_app;
use ids_api::routes::auth::AppState;
use ids_core::domain::entities::Claims;
use ids_core::repositories::{InMemoryUserRepository, RevocationRepository};

use common::*;

async fn introspect<R>(state: &web::Data<AppState<InMemoryUserRepository, R>>, token: &str) -> Value
where
    R: RevocationRepository + 'static,
{
    let app = test::init_service(create_app(state.clone())).await;
    let req = test::TestRequest::post()
        .uri("/auth/introspect")
        .set_json(json!({ "token": token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_introspect_fresh_token() {
    let ctx = context();
    let token = ctx
        .state
        .auth_service
        .login("john", "password123")
        .await
        .unwrap()
        .token;

    let body = introspect(&ctx.state, &token).await;

    assert_eq!(body["code"], 1000);
    assert_eq!(body["results"]["valid"], true);
}

#[actix_web::test]
async fn test_introspect_token_expired_an_hour_ago() {
    let ctx = context();
    let claims = Claims::new(
        "john",
        "devteria.com",
        start_time() - Duration::hours(2),
        "expired-jti",
        "ROLE_USER",
    );
    let token = ctx.codec.issue(&claims).unwrap();

    let body = introspect(&ctx.state, &token).await;

    assert_eq!(body["results"]["valid"], false);
}

#[actix_web::test]
async fn test_introspect_after_clock_passes_expiry() {
    let ctx = context();
    let token = ctx
        .state
        .auth_service
        .login("john", "password123")
        .await
        .unwrap()
        .token;

    ctx.clock.advance(Duration::hours(1));

    let body = introspect(&ctx.state, &token).await;
    assert_eq!(body["results"]["valid"], false);
}

#[actix_web::test]
async fn test_introspect_garbage_and_empty_tokens() {
    let ctx = context();

    assert_eq!(introspect(&ctx.state, "garbage").await["results"]["valid"], false);
    assert_eq!(introspect(&ctx.state, "").await["results"]["valid"], false);
}

#[actix_web::test]
async fn test_introspect_with_store_down_reports_invalid() {
    let ctx = context_with(Arc::new(UnavailableRevocationRepository));
    let claims = Claims::new("john", "devteria.com", start_time(), "some-jti", "ROLE_USER");
    let token = ctx.codec.issue(&claims).unwrap();

    let body = introspect(&ctx.state, &token).await;

    assert_eq!(body["results"]["valid"], false);
}
