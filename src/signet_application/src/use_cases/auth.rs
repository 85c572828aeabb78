use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use signet_core::{
    AccessToken, AccountStoreError, Encrypter, EncrypterError, LoadUserByEmailRepository,
    ParamError, TokenGenerator, TokenGeneratorError, UpdateAccessTokenRepository,
};

/// Error types specific to the auth use case
///
/// Collaborator failures are wrapped unchanged so callers can still tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    AccountStore(#[from] AccountStoreError),
    #[error(transparent)]
    Encrypter(#[from] EncrypterError),
    #[error(transparent)]
    TokenGenerator(#[from] TokenGeneratorError),
}

/// Returned by [`AuthUseCaseBuilder::build`] when a collaborator was never supplied.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthUseCaseBuildError {
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),
}

/// Auth use case - exchanges valid credentials for a persisted access token
#[derive(Clone)]
pub struct AuthUseCase {
    load_user_by_email_repository: Arc<dyn LoadUserByEmailRepository>,
    encrypter: Arc<dyn Encrypter>,
    token_generator: Arc<dyn TokenGenerator>,
    update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
}

impl AuthUseCase {
    pub fn builder() -> AuthUseCaseBuilder {
        AuthUseCaseBuilder::default()
    }

    /// Execute the auth use case
    ///
    /// # Arguments
    /// * `email` - Email the account was registered with
    /// * `password` - Plaintext password to compare against the stored hash
    ///
    /// # Returns
    /// `Some(token)` when the credentials match, `None` when the account is
    /// unknown or the password does not match. Errors are reserved for
    /// missing parameters and collaborator failures.
    #[tracing::instrument(name = "AuthUseCase::authenticate", skip_all)]
    pub async fn authenticate(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Option<AccessToken>, AuthError> {
        ParamError::require("email", email)?;
        ParamError::require("password", password.expose_secret())?;

        let Some(account) = self.load_user_by_email_repository.load(email).await? else {
            tracing::debug!("No account registered for the given email");
            return Ok(None);
        };

        let is_valid = self
            .encrypter
            .compare(password, account.password_hash())
            .await?;
        if !is_valid {
            tracing::debug!(user_id = %account.id(), "Password mismatch");
            return Ok(None);
        }

        let token = self.token_generator.generate(account.id()).await?;

        self.update_access_token_repository
            .update(account.id(), &token)
            .await?;

        tracing::info!(user_id = %account.id(), "Access token issued");
        Ok(Some(token))
    }
}

/// Collects the auth use case collaborators and validates them all at once.
#[derive(Default)]
pub struct AuthUseCaseBuilder {
    load_user_by_email_repository: Option<Arc<dyn LoadUserByEmailRepository>>,
    encrypter: Option<Arc<dyn Encrypter>>,
    token_generator: Option<Arc<dyn TokenGenerator>>,
    update_access_token_repository: Option<Arc<dyn UpdateAccessTokenRepository>>,
}

impl AuthUseCaseBuilder {
    pub fn load_user_by_email_repository(
        mut self,
        repository: Arc<dyn LoadUserByEmailRepository>,
    ) -> Self {
        self.load_user_by_email_repository = Some(repository);
        self
    }

    pub fn encrypter(mut self, encrypter: Arc<dyn Encrypter>) -> Self {
        self.encrypter = Some(encrypter);
        self
    }

    pub fn token_generator(mut self, token_generator: Arc<dyn TokenGenerator>) -> Self {
        self.token_generator = Some(token_generator);
        self
    }

    pub fn update_access_token_repository(
        mut self,
        repository: Arc<dyn UpdateAccessTokenRepository>,
    ) -> Self {
        self.update_access_token_repository = Some(repository);
        self
    }

    /// Fails on the first absent collaborator, in declaration order.
    pub fn build(self) -> Result<AuthUseCase, AuthUseCaseBuildError> {
        use AuthUseCaseBuildError::MissingDependency;

        Ok(AuthUseCase {
            load_user_by_email_repository: self
                .load_user_by_email_repository
                .ok_or(MissingDependency("load_user_by_email_repository"))?,
            encrypter: self.encrypter.ok_or(MissingDependency("encrypter"))?,
            token_generator: self
                .token_generator
                .ok_or(MissingDependency("token_generator"))?,
            update_access_token_repository: self
                .update_access_token_repository
                .ok_or(MissingDependency("update_access_token_repository"))?,
        })
    }
}
