use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use signet_core::{
    AccessToken, Account, AccountStoreError, AddAccountRepository, HashedPassword,
    LoadUserByEmailRepository, UpdateAccessTokenRepository, UserId,
};

/// In-memory account store keyed by id, with an email index for lookups.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

#[derive(Default)]
struct Accounts {
    by_id: HashMap<UserId, Account>,
    id_by_email: HashMap<String, UserId>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LoadUserByEmailRepository for HashMapAccountStore {
    async fn load(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .id_by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }
}

#[async_trait::async_trait]
impl UpdateAccessTokenRepository for HashMapAccountStore {
    async fn update(
        &self,
        user_id: &UserId,
        token: &AccessToken,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .by_id
            .get_mut(user_id)
            .ok_or(AccountStoreError::AccountNotFound)?;

        account.set_access_token(token.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl AddAccountRepository for HashMapAccountStore {
    async fn add(
        &self,
        email: &str,
        password_hash: HashedPassword,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.id_by_email.contains_key(email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        let id = UserId::new(uuid::Uuid::new_v4().to_string());
        let account = Account::new(id.clone(), email.to_owned(), password_hash);
        accounts.id_by_email.insert(email.to_owned(), id.clone());
        accounts.by_id.insert(id, account.clone());
        Ok(account)
    }
}
