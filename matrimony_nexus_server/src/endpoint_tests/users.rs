use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use chrono::Utc;
use matrimony_nexus_engine::{
    db_types::User,
    traits::InsertRecordResult,
    UserApi,
};
use serde_json::json;

use super::{
    helpers::{bearer, issue_token, send_request},
    mocks::MockUserManager,
};
use crate::routes::{AdminCheckRoute, RegisterUserRoute, UsersRoute, UserStatusRoute};

fn user(email: &str, role: Option<&str>) -> User {
    User {
        id: 1,
        name: Some("Test User".to_string()),
        email: email.to_string(),
        role: role.map(String::from),
        premium: true,
        approved_premium: false,
        created_at: Utc::now(),
    }
}

fn configure(user_manager: MockUserManager) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let api = UserApi::new(user_manager);
        cfg.app_data(web::Data::new(api))
            .service(AdminCheckRoute::<MockUserManager>::new())
            .service(UsersRoute::<MockUserManager>::new())
            .service(RegisterUserRoute::<MockUserManager>::new())
            .service(UserStatusRoute::<MockUserManager>::new());
    }
}

#[actix_web::test]
async fn list_all_users() {
    let _ = env_logger::try_init().ok();
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_all_users().returning(|| Ok(vec![user("alice@x.com", None), user("bob@x.com", None)]));
    let (status, body) = send_request(TestRequest::get().uri("/users"), configure(user_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alice@x.com") && body.contains("bob@x.com"), "was: {body}");
}

#[actix_web::test]
async fn register_new_user() {
    let mut user_manager = MockUserManager::new();
    user_manager.expect_insert_user().returning(|_| Ok(InsertRecordResult::Inserted(7)));
    let req = TestRequest::post().uri("/users").set_json(json!({ "name": "Carol", "email": "carol@x.com" }));
    let (status, body) = send_request(req, configure(user_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"insertedId":7}"#);
}

#[actix_web::test]
async fn register_duplicate_user() {
    let mut user_manager = MockUserManager::new();
    user_manager.expect_insert_user().returning(|_| Ok(InsertRecordResult::AlreadyExists));
    let req = TestRequest::post().uri("/users").set_json(json!({ "name": "Carol", "email": "carol@x.com" }));
    let (status, body) = send_request(req, configure(user_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"user already exists","insertedId":null}"#);
}

#[actix_web::test]
async fn admin_check_for_someone_else_is_forbidden() {
    let token = issue_token("alice@x.com");
    let req = TestRequest::get().uri("/users/admin/bob@x.com").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(MockUserManager::new())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("forbidden access"), "was: {body}");
}

#[actix_web::test]
async fn admin_check_for_own_email() {
    let token = issue_token("alice@x.com");
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_user_by_email().returning(|email| Ok(Some(user(email, Some("admin")))));
    let req = TestRequest::get().uri("/users/admin/alice@x.com").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(user_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"admin":true}"#);
}

#[actix_web::test]
async fn premium_status_for_missing_user() {
    let token = issue_token("ghost@x.com");
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_user_by_email().returning(|_| Ok(None));
    let req = TestRequest::get().uri("/users/ghost@x.com").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(user_manager)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"message":"User not found"}"#);
}

#[actix_web::test]
async fn premium_status_for_existing_user() {
    let token = issue_token("alice@x.com");
    let mut user_manager = MockUserManager::new();
    user_manager.expect_fetch_user_by_email().returning(|email| Ok(Some(user(email, None))));
    let req = TestRequest::get().uri("/users/alice@x.com").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(user_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"premium":true,"approvedPremium":false}"#);
}
