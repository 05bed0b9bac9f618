//! Tests for the token endpoint and the two request guards.

use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use chrono::{Days, Duration, Utc};
use matrimony_nexus_engine::{
    db_types::{UpdateResult, User},
    UserApi,
};
use serde_json::Value;

use super::{
    helpers::{bearer, get_auth_config, issue_token, issue_token_with_expiry, send_request},
    mocks::MockUserManager,
};
use crate::{auth::TokenIssuer, routes::MakeAdminRoute};

fn user(email: &str, role: Option<&str>) -> User {
    User {
        id: 1,
        name: Some("Test User".to_string()),
        email: email.to_string(),
        role: role.map(String::from),
        premium: false,
        approved_premium: false,
        created_at: Utc::now(),
    }
}

fn admin_gated_app(user_manager: MockUserManager) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let api = UserApi::new(user_manager);
        cfg.app_data(web::Data::new(api)).service(MakeAdminRoute::<MockUserManager>::new());
    }
}

#[actix_web::test]
async fn admin_route_without_token() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::patch().uri("/users/admin/1");
    let (status, body) = send_request(req, admin_gated_app(MockUserManager::new())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("unauthorized access"), "was: {body}");
    assert!(body.contains("\"code\":401"), "was: {body}");
}

#[actix_web::test]
async fn admin_route_with_garbage_token() {
    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer("made up nonsense"));
    let (status, body) = send_request(req, admin_gated_app(MockUserManager::new())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("unauthorized access"), "was: {body}");
}

#[actix_web::test]
async fn admin_route_with_expired_token() {
    let token = issue_token_with_expiry("admin@x.com", Utc::now() - Days::new(1));
    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer(&token));
    let (status, body) = send_request(req, admin_gated_app(MockUserManager::new())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("unauthorized access"), "was: {body}");
}

#[actix_web::test]
async fn admin_route_for_non_admin() {
    let token = issue_token("alice@x.com");
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_user_by_email().returning(|email| Ok(Some(user(email, None))));
    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer(&token));
    let (status, body) = send_request(req, admin_gated_app(user_manager)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("forbidden access"), "was: {body}");
    assert!(body.contains("\"code\":403"), "was: {body}");
}

#[actix_web::test]
async fn admin_route_for_unknown_user() {
    let token = issue_token("ghost@x.com");
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_user_by_email().returning(|_| Ok(None));
    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer(&token));
    let (status, body) = send_request(req, admin_gated_app(user_manager)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("forbidden access"), "was: {body}");
}

#[actix_web::test]
async fn admin_route_for_admin() {
    let token = issue_token("admin@x.com");
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_user_by_email().returning(|email| Ok(Some(user(email, Some("admin")))));
    user_manager.expect_set_admin_role().returning(|_| Ok(UpdateResult::new(1, 1)));
    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer(&token));
    let (status, body) = send_request(req, admin_gated_app(user_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"matchedCount":1,"modifiedCount":1}"#);
}

/// The role check hits the database on every call, so a still-valid token stops working the moment the role is
/// gone.
#[actix_web::test]
async fn revoked_role_locks_out_a_valid_token() {
    let token = issue_token("former-admin@x.com");

    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer(&token));
    let mut before = MockUserManager::new();
    before.expect_fetch_user_by_email().returning(|email| Ok(Some(user(email, Some("admin")))));
    before.expect_set_admin_role().returning(|_| Ok(UpdateResult::new(1, 1)));
    let (status, _) = send_request(req, admin_gated_app(before)).await;
    assert_eq!(status, StatusCode::OK);

    let mut after = MockUserManager::new();
    after.expect_fetch_user_by_email().returning(|email| Ok(Some(user(email, None))));
    let req = TestRequest::patch().uri("/users/admin/1").insert_header(bearer(&token));
    let (status, body) = send_request(req, admin_gated_app(after)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("forbidden access"), "was: {body}");
}

#[actix_web::test]
async fn issued_tokens_verify_and_expire_in_ten_hours() {
    let req = TestRequest::post()
        .uri("/jwt")
        .set_json(serde_json::json!({ "email": "alice@x.com", "name": "Alice" }));
    let (status, body) = send_request(req, |cfg| {
        cfg.service(crate::routes::issue_jwt);
    })
    .await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    let token = response["token"].as_str().expect("token missing from response");

    let claims = TokenIssuer::new(&get_auth_config()).verify(token).expect("token should verify");
    assert_eq!(claims.email.as_deref(), Some("alice@x.com"));
    assert_eq!(claims.extra.get("name").and_then(Value::as_str), Some("Alice"));
    let expected_expiry = Utc::now() + Duration::hours(10);
    assert!((claims.exp - expected_expiry.timestamp()).abs() < 60, "expiry should be ten hours out");
}
