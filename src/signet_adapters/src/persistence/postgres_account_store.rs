use secrecy::ExposeSecret;
use signet_core::{
    AccessToken, Account, AccountStoreError, AddAccountRepository, HashedPassword,
    LoadUserByEmailRepository, UpdateAccessTokenRepository, UserId,
};
use sqlx::{PgPool, migrate::MigrateError};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: String,
    email: String,
    password_hash: String,
    access_token: Option<String>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        let account = Account::new(
            UserId::from(row.id),
            row.email,
            HashedPassword::from(row.password_hash),
        );
        match row.access_token {
            Some(token) => account.with_access_token(AccessToken::from(token)),
            None => account,
        }
    }
}

#[async_trait::async_trait]
impl LoadUserByEmailRepository for PostgresAccountStore {
    #[tracing::instrument(name = "Loading account from PostgreSQL", skip_all)]
    async fn load(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, password_hash, access_token
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(row.map(Account::from))
    }
}

#[async_trait::async_trait]
impl UpdateAccessTokenRepository for PostgresAccountStore {
    #[tracing::instrument(name = "Updating access token in PostgreSQL", skip_all)]
    async fn update(
        &self,
        user_id: &UserId,
        token: &AccessToken,
    ) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET access_token = $1
                WHERE id = $2
            "#,
        )
        .bind(token.as_ref().expose_secret())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl AddAccountRepository for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add(
        &self,
        email: &str,
        password_hash: HashedPassword,
    ) -> Result<Account, AccountStoreError> {
        let id = UserId::new(uuid::Uuid::new_v4().to_string());

        sqlx::query(
            r#"
                INSERT INTO accounts (id, email, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_str())
        .bind(email)
        .bind(password_hash.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::AccountAlreadyExists;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(Account::new(id, email.to_owned(), password_hash))
    }
}
