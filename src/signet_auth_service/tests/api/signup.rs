use secrecy::ExposeSecret;
use signet_core::LoadUserByEmailRepository;

use crate::helpers::{TestApp, error_message, get_random_email};

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .post_signup(&serde_json::json!({
            "email": email,
            "password": "password123",
            "repeatPassword": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email"], email.as_str());
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn should_store_password_hash_not_plaintext() {
    let app = TestApp::new().await;
    let email = app.signup_user("password123").await;

    let account = app.account_store.load(&email).await.unwrap().unwrap();
    let stored = account.password_hash().as_ref().expose_secret();

    assert_ne!(stored, "password123");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn should_return_400_if_passwords_do_not_match() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .post_signup(&serde_json::json!({
            "email": email,
            "password": "password123",
            "repeatPassword": "password456",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid param: repeatPassword");
    assert!(app.account_store.load(&email).await.unwrap().is_none());
}

#[tokio::test]
async fn should_return_400_if_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&serde_json::json!({
            "email": "invalid_email",
            "password": "password123",
            "repeatPassword": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid param: email");
}

#[tokio::test]
async fn should_return_400_if_fields_are_missing() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let test_cases = [
        (
            serde_json::json!({ "password": "password123", "repeatPassword": "password123" }),
            "Missing param: email",
        ),
        (
            serde_json::json!({ "email": email, "repeatPassword": "password123" }),
            "Missing param: password",
        ),
        (
            serde_json::json!({ "email": email, "password": "password123" }),
            "Missing param: repeatPassword",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_signup(&body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        assert_eq!(error_message(response).await, expected);
    }
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = app.signup_user("password123").await;

    let response = app
        .post_signup(&serde_json::json!({
            "email": email,
            "password": "password123",
            "repeatPassword": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "Account already exists");
}

#[tokio::test]
async fn should_return_400_json_error_if_body_is_malformed() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&serde_json::json!({
            "email": 123,
            "password": "password123",
            "repeatPassword": "password123",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid request body");

    let response = app.post_raw("/signup", "not json").await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid request body");
}
