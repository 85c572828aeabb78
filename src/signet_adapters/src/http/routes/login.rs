use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use signet_application::AuthUseCase;
use signet_core::{EmailValidator, ParamError};

use super::{error::AuthApiError, signup::empty_secret};

/// State required by the login route.
#[derive(Clone)]
pub struct LoginState<V> {
    pub auth_use_case: Arc<AuthUseCase>,
    pub email_validator: V,
    pub cookie_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Exchanges credentials for an access token.
///
/// The token is returned in the body and also set as an HTTP-only cookie.
/// Unknown accounts and wrong passwords both answer 401.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<V>(
    State(state): State<LoginState<V>>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginResponse>), AuthApiError>
where
    V: EmailValidator + Clone + 'static,
{
    let Json(request) = body?;
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_else(empty_secret);

    ParamError::require("email", &email)?;
    ParamError::require("password", password.expose_secret())?;
    if !state.email_validator.is_valid(&email) {
        return Err(ParamError::invalid("email").into());
    }

    let token = state
        .auth_use_case
        .authenticate(&email, &password)
        .await?
        .ok_or(AuthApiError::Unauthorized)?;

    let access_token = token.as_ref().expose_secret().clone();
    let cookie = create_auth_cookie(state.cookie_name.clone(), access_token.clone());

    Ok((jar.add(cookie), Json(LoginResponse { access_token })))
}

// Create cookie and set the value to the passed-in token string
pub fn create_auth_cookie(cookie_name: String, token: String) -> Cookie<'static> {
    Cookie::build((cookie_name, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}
