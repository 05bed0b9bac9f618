use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use log::error;
use matrimony_nexus_engine::traits::{
    BiodataError,
    ContactRequestError,
    FavoriteError,
    PaymentError,
    StatsError,
    SuccessStoryError,
    UserAccountError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Payload deserialization error")]
    CouldNotDeserializePayload,
    #[error("Could not read request path: {0}")]
    InvalidRequestPath(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("Authentication Error. {0}")]
    AuthenticationError(#[from] AuthError),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("The record already exists. {0}")]
    DuplicateRecord(String),
    #[error("Insufficient Permissions. {0}")]
    InsufficientPermissions(String),
    #[error("The payment provider rejected the request. {0}")]
    PaymentProviderError(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CouldNotDeserializePayload => StatusCode::BAD_REQUEST,
            Self::InvalidRequestPath(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateRecord(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            Self::InsufficientPermissions(_) => StatusCode::FORBIDDEN,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PaymentProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.status_code();
        HttpResponse::build(code)
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "success": false, "message": self.client_message(), "code": code.as_u16() }).to_string())
    }
}

impl ServerError {
    /// The message that goes into the error envelope. Auth failures always present the same two fixed strings so
    /// that clients cannot distinguish a missing user from a bad signature.
    fn client_message(&self) -> String {
        match self {
            Self::AuthenticationError(_) => "unauthorized access".to_string(),
            Self::InsufficientPermissions(_) => "forbidden access".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("No bearer token was provided.")]
    MissingToken,
    #[error("Bearer token is invalid. {0}")]
    ValidationError(String),
    #[error("Could not sign the token. {0}")]
    SigningError(String),
}

impl From<UserAccountError> for ServerError {
    fn from(e: UserAccountError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<BiodataError> for ServerError {
    fn from(e: BiodataError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<ContactRequestError> for ServerError {
    fn from(e: ContactRequestError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<FavoriteError> for ServerError {
    fn from(e: FavoriteError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<PaymentError> for ServerError {
    fn from(e: PaymentError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<StatsError> for ServerError {
    fn from(e: StatsError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<SuccessStoryError> for ServerError {
    fn from(e: SuccessStoryError) -> Self {
        Self::BackendError(e.to_string())
    }
}

impl From<stripe_tools::StripeApiError> for ServerError {
    fn from(e: stripe_tools::StripeApiError) -> Self {
        Self::PaymentProviderError(e.to_string())
    }
}
