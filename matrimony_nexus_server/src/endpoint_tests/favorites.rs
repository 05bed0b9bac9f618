use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use matrimony_nexus_engine::{
    traits::{FavoriteError, InsertRecordResult},
    FavoriteApi,
};
use serde_json::json;

use super::{
    helpers::{bearer, issue_token, send_request},
    mocks::MockFavoriteManager,
};
use crate::routes::{AddFavoriteRoute, RemoveFavoriteRoute};

fn configure(favorite_manager: MockFavoriteManager) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let api = FavoriteApi::new(favorite_manager);
        cfg.app_data(web::Data::new(api))
            .service(AddFavoriteRoute::<MockFavoriteManager>::new())
            .service(RemoveFavoriteRoute::<MockFavoriteManager>::new());
    }
}

fn new_favorite() -> serde_json::Value {
    json!({ "userId": "alice@x.com", "biodataId": 12, "name": "Test Candidate" })
}

#[actix_web::test]
async fn bookmarking_needs_a_token() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/favorites").set_json(new_favorite());
    let (status, body) = send_request(req, configure(MockFavoriteManager::new())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("unauthorized access"), "was: {body}");
}

#[actix_web::test]
async fn bookmarking_a_biodata() {
    let token = issue_token("alice@x.com");
    let mut favorite_manager = MockFavoriteManager::new();
    favorite_manager.expect_insert_favorite().returning(|_| Ok(InsertRecordResult::Inserted(4)));
    let req = TestRequest::post().uri("/favorites").insert_header(bearer(&token)).set_json(new_favorite());
    let (status, body) = send_request(req, configure(favorite_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Added to favorites.","result":{"insertedId":4}}"#);
}

#[actix_web::test]
async fn bookmarking_the_same_biodata_twice() {
    let token = issue_token("alice@x.com");
    let mut favorite_manager = MockFavoriteManager::new();
    favorite_manager.expect_insert_favorite().returning(|_| Ok(InsertRecordResult::AlreadyExists));
    let req = TestRequest::post().uri("/favorites").insert_header(bearer(&token)).set_json(new_favorite());
    let (status, body) = send_request(req, configure(favorite_manager)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Already in favorites."}"#);
}

#[actix_web::test]
async fn storage_failures_do_not_leak_details() {
    let token = issue_token("alice@x.com");
    let mut favorite_manager = MockFavoriteManager::new();
    favorite_manager
        .expect_insert_favorite()
        .returning(|_| Err(FavoriteError::DatabaseError("table is on fire".to_string())));
    let req = TestRequest::post().uri("/favorites").insert_header(bearer(&token)).set_json(new_favorite());
    let (status, body) = send_request(req, configure(favorite_manager)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Failed to add to favorites."}"#);
    assert!(!body.contains("on fire"));
}

#[actix_web::test]
async fn removing_a_bookmark() {
    let token = issue_token("alice@x.com");
    let mut favorite_manager = MockFavoriteManager::new();
    favorite_manager.expect_delete_favorite_by_biodata_id().returning(|_| Ok(true));
    let req = TestRequest::delete().uri("/favorites/12").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(favorite_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Biodata removed from favorites."}"#);
}

#[actix_web::test]
async fn removing_a_bookmark_that_is_not_there() {
    let token = issue_token("alice@x.com");
    let mut favorite_manager = MockFavoriteManager::new();
    favorite_manager.expect_delete_favorite_by_biodata_id().returning(|_| Ok(false));
    let req = TestRequest::delete().uri("/favorites/99").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(favorite_manager)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"success":false,"message":"Biodata not found."}"#);
}
