use std::sync::Arc;

use fake::{Fake, faker::internet::en::SafeEmail};
use secrecy::Secret;
use serde::Serialize;
use signet_adapters::{
    config::{JWT_COOKIE_NAME, test as test_config},
    crypto::Argon2Encrypter,
    persistence::HashMapAccountStore,
    token::JwtTokenGenerator,
    validation::RegexEmailValidator,
};
use signet_application::AuthUseCase;
use signet_auth_service::AuthService;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: HashMapAccountStore,
    pub token_generator: JwtTokenGenerator,
}

impl TestApp {
    pub async fn new() -> Self {
        let account_store = HashMapAccountStore::new();
        let encrypter = Argon2Encrypter::new();
        let token_generator = JwtTokenGenerator::new(Secret::new("test_secret".to_owned()), 600);

        let auth_use_case = AuthUseCase::builder()
            .load_user_by_email_repository(Arc::new(account_store.clone()))
            .encrypter(Arc::new(encrypter.clone()))
            .token_generator(Arc::new(token_generator.clone()))
            .update_access_token_repository(Arc::new(account_store.clone()))
            .build()
            .expect("all dependencies are provided");

        let auth_service = AuthService::new(
            auth_use_case,
            account_store.clone(),
            encrypter,
            RegexEmailValidator::new(),
            JWT_COOKIE_NAME.to_owned(),
        );

        let listener = TcpListener::bind(test_config::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(auth_service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            account_store,
            token_generator,
        }
    }

    pub async fn post_signup<Body: Serialize + ?Sized>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: Serialize + ?Sized>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Posts a raw body with no `Content-Type` header.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers an account and returns its email.
    pub async fn signup_user(&self, password: &str) -> String {
        let email = get_random_email();
        let response = self
            .post_signup(&serde_json::json!({
                "email": email,
                "password": password,
                "repeatPassword": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        email
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Could not deserialize body");
    body["error"].as_str().unwrap_or_default().to_owned()
}
