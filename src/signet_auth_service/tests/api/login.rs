use secrecy::ExposeSecret;
use signet_adapters::{config::JWT_COOKIE_NAME, http::routes::LoginResponse};
use signet_core::{AccessToken, LoadUserByEmailRepository};

use crate::helpers::{TestApp, error_message, get_random_email};

#[tokio::test]
async fn should_return_200_with_token_if_valid_credentials() {
    let app = TestApp::new().await;
    let email = app.signup_user("password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .headers()
        .get("set-cookie")
        .expect("auth cookie is set")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(cookie.starts_with(&format!("{JWT_COOKIE_NAME}=")));
    assert!(cookie.contains("HttpOnly"));

    let body: LoginResponse = response.json().await.unwrap();
    assert!(cookie.contains(&body.access_token));

    let account = app.account_store.load(&email).await.unwrap().unwrap();
    let claims = app
        .token_generator
        .decode(&AccessToken::from(body.access_token.clone()))
        .unwrap();
    assert_eq!(claims.sub, account.id().to_string());
    assert_eq!(
        account.access_token().unwrap().as_ref().expose_secret(),
        &body.access_token
    );
}

#[tokio::test]
async fn should_keep_only_latest_token() {
    let app = TestApp::new().await;
    let email = app.signup_user("password123").await;
    let credentials = serde_json::json!({ "email": email, "password": "password123" });

    app.post_login(&credentials).await;
    // exp has one-second resolution, so wait for a distinct token
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let response = app.post_login(&credentials).await;
    let latest: LoginResponse = response.json().await.unwrap();

    let account = app.account_store.load(&email).await.unwrap().unwrap();
    assert_eq!(
        account.access_token(),
        Some(&AccessToken::from(latest.access_token))
    );
}

#[tokio::test]
async fn should_return_401_if_password_is_wrong() {
    let app = TestApp::new().await;
    let email = app.signup_user("password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "wrong_password" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Unauthorized");

    let account = app.account_store.load(&email).await.unwrap().unwrap();
    assert!(account.access_token().is_none());
}

#[tokio::test]
async fn should_return_401_if_account_does_not_exist() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "email": get_random_email(),
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_if_input_is_missing_or_invalid() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            serde_json::json!({ "password": "password123" }),
            "Missing param: email",
        ),
        (
            serde_json::json!({ "email": "", "password": "password123" }),
            "Missing param: email",
        ),
        (
            serde_json::json!({ "email": get_random_email() }),
            "Missing param: password",
        ),
        (
            serde_json::json!({ "email": "invalid_email", "password": "password123" }),
            "Invalid param: email",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        assert_eq!(error_message(response).await, expected);
    }
}

#[tokio::test]
async fn should_return_400_json_error_if_body_is_malformed() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({ "email": 123, "password": "password123" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid request body");

    let response = app
        .post_raw("/login", r#"{"email":"user@example.com","password":"password123"}"#)
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid request body");
}
