//! Bearer-token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs signed with the process-wide secret from [`AuthConfig`]. The claims are whatever
//! JSON object the client supplied at login (typically at least `email`), plus the `exp` claim the issuer adds.
//! Nothing about a token is stored server-side; admin rights are re-checked against the database on every gated
//! request (see [`crate::middleware`]).
use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::AuthConfig,
    errors::{AuthError, ServerError},
};

/// Tokens expire exactly this long after issuance. There is no refresh mechanism.
pub const TOKEN_EXPIRY_HOURS: i64 = 10;

/// The claims carried by an access token. The login payload is free-form, so everything except the expiry is
/// optional; handlers that need an identity read `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TokenClaims {
    /// The authenticated email, or an error when the token was issued without one.
    pub fn require_email(&self) -> Result<&str, ServerError> {
        self.email
            .as_deref()
            .ok_or_else(|| AuthError::ValidationError("Token does not carry an email claim.".to_string()).into())
    }
}

/// Extracts the claims that [`crate::middleware::JwtMiddlewareService`] placed in the request extensions. Fails with
/// a 401 when the route was not wrapped in the authentication middleware.
impl FromRequest for TokenClaims {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req.extensions().get::<TokenClaims>().cloned().ok_or(ServerError::from(AuthError::MissingToken));
        ready(claims)
    }
}

/// Signs and verifies access tokens with the shared HS256 secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.reveal().as_bytes();
        Self { encoding_key: EncodingKey::from_secret(secret), decoding_key: DecodingKey::from_secret(secret) }
    }

    /// Issues a token over the given claims object. The claims are taken as-is; only the expiry is added (and
    /// overwritten if the client tried to supply its own).
    pub fn issue_token(&self, claims: Value) -> Result<String, AuthError> {
        let mut claims = match claims {
            Value::Object(map) => map,
            other => {
                return Err(AuthError::ValidationError(format!("Token claims must be a JSON object, got {other}")));
            },
        };
        let expiry = Utc::now() + Duration::hours(TOKEN_EXPIRY_HOURS);
        claims.insert("exp".to_string(), Value::from(expiry.timestamp()));
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningError(e.to_string()))?;
        debug!("🔑️ Issued access token, expires {expiry}");
        Ok(token)
    }

    /// Validates the signature and expiry of a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // The login payload is free-form, so we cannot require any particular claim to be present.
        validation.required_spec_claims.clear();
        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::ValidationError(e.to_string()))?;
        Ok(data.claims)
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &actix_web::http::header::HeaderMap) -> Result<&str, AuthError> {
    let header = headers.get("Authorization").ok_or(AuthError::MissingToken)?;
    let value = header.to_str().map_err(|e| AuthError::ValidationError(e.to_string()))?;
    value.strip_prefix("Bearer ").map(str::trim).ok_or_else(|| {
        AuthError::ValidationError("Authorization header does not use the Bearer scheme.".to_string())
    })
}
