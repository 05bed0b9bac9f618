use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use chrono::Utc;
use matrimony_nexus_engine::{db_types::PaymentRecord, PaymentApi};
use mns_common::UsdAmount;
use serde_json::{json, Value};

use super::{
    helpers::{bearer, issue_token, send_request},
    mocks::MockPaymentManager,
};
use crate::routes::{PaymentsForEmailRoute, RecordPaymentRoute};

fn payment(email: &str) -> PaymentRecord {
    PaymentRecord {
        id: 1,
        email: Some(email.to_string()),
        price: UsdAmount::from_dollars(25.0),
        transaction_id: Some("pi_123".to_string()),
        biodata_id: Some(5),
        status: Some("succeeded".to_string()),
        created_at: Utc::now(),
    }
}

fn configure(payment_manager: MockPaymentManager) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let api = PaymentApi::new(payment_manager);
        cfg.app_data(web::Data::new(api))
            .service(PaymentsForEmailRoute::<MockPaymentManager>::new())
            .service(RecordPaymentRoute::<MockPaymentManager>::new());
    }
}

#[actix_web::test]
async fn payment_history_needs_a_token() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/payments/alice@x.com");
    let (status, body) = send_request(req, configure(MockPaymentManager::new())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("unauthorized access"), "was: {body}");
}

#[actix_web::test]
async fn payment_history_for_someone_else_is_forbidden() {
    let token = issue_token("bob@x.com");
    let req = TestRequest::get().uri("/payments/alice@x.com").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(MockPaymentManager::new())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("forbidden access"), "was: {body}");
}

#[actix_web::test]
async fn payment_history_for_own_email() {
    let token = issue_token("alice@x.com");
    let mut payment_manager = MockPaymentManager::new();
    payment_manager.expect_fetch_payments_for_email().returning(|email| Ok(vec![payment(email)]));
    let req = TestRequest::get().uri("/payments/alice@x.com").insert_header(bearer(&token));
    let (status, body) = send_request(req, configure(payment_manager)).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response[0]["email"], "alice@x.com");
    assert_eq!(response[0]["price"], 25.0);
    assert_eq!(response[0]["transactionId"], "pi_123");
}

#[actix_web::test]
async fn recording_a_payment_with_cart_ids() {
    let mut payment_manager = MockPaymentManager::new();
    payment_manager.expect_insert_payment().returning(|_| Ok(9));
    let req = TestRequest::post().uri("/payments").set_json(json!({
        "email": "alice@x.com",
        "price": 25.0,
        "transactionId": "pi_123",
        "biodataId": 5,
        "status": "succeeded",
        "cartIds": ["a", "b"]
    }));
    let (status, body) = send_request(req, configure(payment_manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"paymentResult":{"insertedId":9}}"#);
}

#[actix_web::test]
async fn recording_a_payment_without_cart_ids() {
    let mut payment_manager = MockPaymentManager::new();
    payment_manager.expect_insert_payment().returning(|_| Ok(10));
    let req = TestRequest::post().uri("/payments").set_json(json!({
        "email": "alice@x.com",
        "price": 25.0,
        "transactionId": "pi_456",
        "biodataId": 5,
        "status": "succeeded"
    }));
    let (status, body) = send_request(req, configure(payment_manager)).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["paymentResult"]["insertedId"], 10);
    assert_eq!(response["deleteResult"], Value::Null);
    assert_eq!(response["message"], "No cart items to delete.");
}
