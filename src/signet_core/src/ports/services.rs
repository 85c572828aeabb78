use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    access_token::AccessToken,
    account::{HashedPassword, UserId},
};

#[derive(Debug, Error)]
#[error("Encrypter error: {0}")]
pub struct EncrypterError(pub String);

/// Compares a plaintext secret against a stored hash.
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn compare(
        &self,
        plain: &Secret<String>,
        hash: &HashedPassword,
    ) -> Result<bool, EncrypterError>;
}

/// Produces the stored form of a new password.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &Secret<String>) -> Result<HashedPassword, EncrypterError>;
}

#[derive(Debug, Error)]
#[error("Token generator error: {0}")]
pub struct TokenGeneratorError(pub String);

#[async_trait]
pub trait TokenGenerator: Send + Sync {
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenGeneratorError>;
}

/// Answers whether a string is a syntactically valid email address.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}
