//! Application error types.
//!
//! Every error surfaced to a caller carries only a coarse error code
//! from the fixed envelope vocabulary; the underlying cause is logged
//! here with full detail and never echoed for credential or token
//! failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gately_core::AuthError;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorBody;

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorised")]
    Unauthorised,

    #[error("User does not exist")]
    UserDoNotExist,

    #[error("Token generation failed")]
    TokenGeneration,

    #[error("Signing key unavailable")]
    KeyNotFound,

    #[error("Database error")]
    Database,
}

impl ApiError {
    /// `(status, errorCode, message)` triple for the response envelope.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::InvalidRequest(m) => (StatusCode::BAD_REQUEST, "invalid-request", m.clone()),
            ApiError::Unauthorised => (
                StatusCode::UNAUTHORIZED,
                "unauthorised",
                "Invalid credentials".into(),
            ),
            ApiError::UserDoNotExist => (
                StatusCode::UNAUTHORIZED,
                "user-do-not-exist",
                "User does not exist".into(),
            ),
            ApiError::TokenGeneration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "token-error",
                "Token generation failed".into(),
            ),
            ApiError::KeyNotFound => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "key-not-found",
                "Signing key unavailable".into(),
            ),
            ApiError::Database => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database-error",
                "Database error".into(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.parts();
        let body = Json(ErrorBody {
            status: status.as_u16(),
            message,
            error_code: error_code.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::CredentialMismatch | AuthError::TokenInvalid => ApiError::Unauthorised,
            AuthError::Validation(m) => ApiError::InvalidRequest(m),
            AuthError::KeyProvisioning(m) => {
                error!(cause = %m, "key provisioning failure");
                ApiError::KeyNotFound
            }
            AuthError::TokenSigning(m) => {
                error!(cause = %m, "token signing failure");
                ApiError::TokenGeneration
            }
            AuthError::Db(e) => {
                warn!(error = %e, "database failure");
                ApiError::Database
            }
        }
    }
}
