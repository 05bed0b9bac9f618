use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use chrono::Utc;
use matrimony_nexus_engine::{
    db_types::Biodata,
    mne_api::biodata_objects::BiodataSearchResult,
    traits::InsertRecordResult,
    BiodataApi,
};
use serde_json::{json, Value};

use super::{helpers::send_request, mocks::MockBiodataManager};
use crate::routes::{BiodataByIdRoute, BiodatasRoute, CreateBiodataRoute};

fn biodata(id: i64) -> Biodata {
    Biodata {
        biodata_id: id,
        biodata_type: Some("Male".to_string()),
        name: Some("Test Candidate".to_string()),
        profile_image: None,
        date_of_birth: None,
        height: Some("5'7\"".to_string()),
        height_inches: Some(67),
        weight: None,
        age: Some(30),
        occupation: None,
        race: None,
        fathers_name: None,
        mothers_name: None,
        permanent_division: Some("Dhaka".to_string()),
        present_division: None,
        expected_partner_age: None,
        expected_partner_height: None,
        expected_partner_weight: None,
        contact_email: "candidate@x.com".to_string(),
        mobile_number: None,
        premium: false,
        created_at: Utc::now(),
    }
}

fn configure(biodata_manager: MockBiodataManager) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let api = BiodataApi::new(biodata_manager);
        cfg.app_data(web::Data::new(api))
            .service(BiodatasRoute::<MockBiodataManager>::new())
            .service(CreateBiodataRoute::<MockBiodataManager>::new())
            .service(BiodataByIdRoute::<MockBiodataManager>::new());
    }
}

#[actix_web::test]
async fn non_numeric_biodata_id_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/biodatas/not-a-number");
    let (status, body) = send_request(req, configure(MockBiodataManager::new())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid biodataId format."}"#);
}

#[actix_web::test]
async fn missing_biodata_reports_exists_false() {
    let mut biodata_manager = MockBiodataManager::new();
    biodata_manager.expect_fetch_biodata_by_id().returning(|_| Ok(None));
    let req = TestRequest::get().uri("/biodatas/42");
    let (status, body) = send_request(req, configure(biodata_manager)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"exists":false}"#);
}

#[actix_web::test]
async fn existing_biodata_is_wrapped_in_an_exists_envelope() {
    let mut biodata_manager = MockBiodataManager::new();
    biodata_manager.expect_fetch_biodata_by_id().returning(|id| Ok(Some(biodata(id))));
    let req = TestRequest::get().uri("/biodatas/42");
    let (status, body) = send_request(req, configure(biodata_manager)).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["exists"], true);
    assert_eq!(response["biodata"]["biodataId"], 42);
    assert_eq!(response["biodata"]["contactEmail"], "candidate@x.com");
    // The derived filtering column never leaks into responses.
    assert!(response["biodata"].get("heightInches").is_none());
}

#[actix_web::test]
async fn duplicate_biodata_creation() {
    let mut biodata_manager = MockBiodataManager::new();
    biodata_manager.expect_insert_biodata().returning(|_| Ok(InsertRecordResult::AlreadyExists));
    let req = TestRequest::post().uri("/biodatas").set_json(json!({ "contactEmail": "taken@x.com" }));
    let (status, body) = send_request(req, configure(biodata_manager)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Biodata already exists for this email. Please edit instead."}"#);
}

#[actix_web::test]
async fn biodata_creation_returns_the_new_id() {
    let mut biodata_manager = MockBiodataManager::new();
    biodata_manager.expect_insert_biodata().returning(|_| Ok(InsertRecordResult::Inserted(3)));
    let req = TestRequest::post().uri("/biodatas").set_json(json!({ "contactEmail": "new@x.com" }));
    let (status, body) = send_request(req, configure(biodata_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Biodata created successfully.","insertedId":3}"#);
}

#[actix_web::test]
async fn search_filters_come_from_the_query_string() {
    let mut biodata_manager = MockBiodataManager::new();
    biodata_manager
        .expect_search_biodatas()
        .withf(|query| {
            query.gender.as_deref() == Some("Male")
                && query.age_range() == Some((25, 35))
                && query.page() == 2
                && query.limit() == 10
        })
        .returning(|_| Ok(BiodataSearchResult { data: vec![], total: 0 }));
    let req = TestRequest::get().uri("/biodatas?gender=Male&minAge=25&maxAge=35&page=2&limit=10");
    let (status, body) = send_request(req, configure(biodata_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"data":[],"total":0}"#);
}

#[actix_web::test]
async fn unknown_query_parameters_are_ignored() {
    let mut biodata_manager = MockBiodataManager::new();
    biodata_manager
        .expect_search_biodatas()
        .withf(|query| query.gender.as_deref() == Some("Female"))
        .returning(|_| Ok(BiodataSearchResult { data: vec![], total: 0 }));
    let req = TestRequest::get().uri("/biodatas?gender=Female&sortBy=age&utm_source=newsletter");
    let (status, body) = send_request(req, configure(biodata_manager)).await;
    assert_eq!(status, StatusCode::OK, "was: {body}");
}
