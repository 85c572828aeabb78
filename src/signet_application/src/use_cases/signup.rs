use secrecy::{ExposeSecret, Secret};
use signet_core::{
    Account, AccountStoreError, AddAccountRepository, EmailValidator, EncrypterError, ParamError,
    PasswordHasher,
};

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    AccountStore(#[from] AccountStoreError),
    #[error(transparent)]
    Encrypter(#[from] EncrypterError),
}

/// Signup use case - handles account registration
pub struct SignupUseCase<'a, A, H, V>
where
    A: AddAccountRepository,
    H: PasswordHasher,
    V: EmailValidator,
{
    account_repository: &'a A,
    password_hasher: &'a H,
    email_validator: &'a V,
}

impl<'a, A, H, V> SignupUseCase<'a, A, H, V>
where
    A: AddAccountRepository,
    H: PasswordHasher,
    V: EmailValidator,
{
    pub fn new(account_repository: &'a A, password_hasher: &'a H, email_validator: &'a V) -> Self {
        Self {
            account_repository,
            password_hasher,
            email_validator,
        }
    }

    /// Execute the signup use case
    ///
    /// # Arguments
    /// * `email` - Email to register, checked against the email validator
    /// * `password` - Plaintext password, stored only as a hash
    /// * `repeat_password` - Confirmation that must equal `password`
    ///
    /// # Returns
    /// The created account, or a SignupError. A confirmation mismatch is
    /// reported as an invalid `repeatPassword` and nothing is stored.
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: &str,
        password: &Secret<String>,
        repeat_password: &Secret<String>,
    ) -> Result<Account, SignupError> {
        ParamError::require("email", email)?;
        ParamError::require("password", password.expose_secret())?;
        ParamError::require("repeatPassword", repeat_password.expose_secret())?;

        if !self.email_validator.is_valid(email) {
            return Err(ParamError::invalid("email").into());
        }

        if password.expose_secret() != repeat_password.expose_secret() {
            return Err(ParamError::invalid("repeatPassword").into());
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let account = self.account_repository.add(email, password_hash).await?;

        tracing::info!(user_id = %account.id(), "Account created");
        Ok(account)
    }
}
