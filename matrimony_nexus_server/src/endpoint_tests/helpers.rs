use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use log::debug;
use mns_common::Secret;
use serde_json::json;

use crate::{auth::TokenIssuer, config::AuthConfig};

// Test-only signing secret. DO NOT re-use this value anywhere.
pub const TEST_JWT_SECRET: &str = "do-not-use-this-secret-outside-of-tests";

pub fn get_auth_config() -> AuthConfig {
    AuthConfig { jwt_secret: Secret::new(TEST_JWT_SECRET.to_string()) }
}

/// Issues a valid token for the given email, through the same issuer the server uses.
pub fn issue_token(email: &str) -> String {
    TokenIssuer::new(&get_auth_config()).issue_token(json!({ "email": email })).expect("Failed to sign test token")
}

/// Signs a token with an arbitrary expiry, bypassing the issuer's fixed 10 hour window.
pub fn issue_token_with_expiry(email: &str, expiry: DateTime<Utc>) -> String {
    let claims = json!({ "email": email, "exp": expiry.timestamp() });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()))
        .expect("Failed to sign test token")
}

/// Builds an app from the given route configuration (plus the token issuer every gated route needs), sends the
/// request and returns the response status and body.
pub async fn send_request<F>(req: TestRequest, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let jwt_signer = TokenIssuer::new(&get_auth_config());
    let app = App::new().app_data(web::Data::new(jwt_signer)).configure(configure);
    let app = test::init_service(app).await;
    debug!("Making request");
    match test::try_call_service(&app, req.to_request()).await {
        Ok(res) => {
            let (_, res) = res.into_parts();
            let status = res.status();
            let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
            (status, body)
        },
        // Guard rejections surface as errors; render them the way the live server would.
        Err(e) => {
            let res = e.error_response();
            let status = res.status();
            let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
            (status, body)
        },
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
