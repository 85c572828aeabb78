use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use signet_application::SignupUseCase;
use signet_core::{AddAccountRepository, EmailValidator, PasswordHasher};

use super::error::AuthApiError;

/// Absent fields deserialize to `None` and are reported as missing params.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    #[serde(rename = "repeatPassword")]
    pub repeat_password: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<A, H, V>(
    State((account_store, password_hasher, email_validator)): State<(A, H, V)>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    A: AddAccountRepository + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    V: EmailValidator + Clone + 'static,
{
    let Json(request) = body?;
    let use_case = SignupUseCase::new(&account_store, &password_hasher, &email_validator);

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_else(empty_secret);
    let repeat_password = request.repeat_password.unwrap_or_else(empty_secret);

    let account = use_case
        .execute(&email, &password, &repeat_password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: account.id().to_string(),
            email: account.email().to_owned(),
        }),
    ))
}

pub(crate) fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}
