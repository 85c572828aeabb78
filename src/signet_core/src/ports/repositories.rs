use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    access_token::AccessToken,
    account::{Account, HashedPassword, UserId},
};

// Account store port traits and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Read side of the account store.
#[async_trait]
pub trait LoadUserByEmailRepository: Send + Sync {
    /// Returns `Ok(None)` when no account is registered under `email`.
    async fn load(&self, email: &str) -> Result<Option<Account>, AccountStoreError>;
}

/// Write side used after a successful authentication.
#[async_trait]
pub trait UpdateAccessTokenRepository: Send + Sync {
    async fn update(&self, user_id: &UserId, token: &AccessToken)
    -> Result<(), AccountStoreError>;
}

/// Account creation used by sign-up.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(
        &self,
        email: &str,
        password_hash: HashedPassword,
    ) -> Result<Account, AccountStoreError>;
}
