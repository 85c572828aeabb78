use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use signet_application::{AuthError, SignupError};
use signet_core::{AccountStoreError, ParamError};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(#[from] ParamError),

    #[error("Invalid request body")]
    MalformedBody(String),

    #[error("Account already exists")]
    AccountAlreadyExists,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AuthApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthApiError::MalformedBody(cause) => {
                tracing::debug!(cause = %cause, "Rejected request body");
                StatusCode::BAD_REQUEST
            }
            AuthApiError::AccountAlreadyExists => StatusCode::CONFLICT,
            AuthApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthApiError::UnexpectedError(cause) => {
                tracing::error!(cause = %cause, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        AuthApiError::MalformedBody(rejection.body_text())
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Param(e) => e.into(),
            AuthError::AccountStore(_) | AuthError::Encrypter(_) | AuthError::TokenGenerator(_) => {
                AuthApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<SignupError> for AuthApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::Param(e) => e.into(),
            SignupError::AccountStore(AccountStoreError::AccountAlreadyExists) => {
                AuthApiError::AccountAlreadyExists
            }
            SignupError::AccountStore(_) | SignupError::Encrypter(_) => {
                AuthApiError::UnexpectedError(error.to_string())
            }
        }
    }
}
