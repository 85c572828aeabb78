use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier, Version,
    password_hash::{SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, Secret};
use signet_core::{Encrypter, EncrypterError, HashedPassword, PasswordHasher};

/// Argon2id implementation of the password ports.
///
/// Hashing and verification are CPU bound and run on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2Encrypter;

impl Argon2Encrypter {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, EncrypterError> {
    let params = Params::new(15000, 2, 1, None).map_err(|e| EncrypterError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait::async_trait]
impl Encrypter for Argon2Encrypter {
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn compare(
        &self,
        plain: &Secret<String>,
        hash: &HashedPassword,
    ) -> Result<bool, EncrypterError> {
        let expected_password_hash = hash.as_ref().clone();
        let password_candidate = plain.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash =
                    PasswordHash::new(expected_password_hash.expose_secret())
                        .map_err(|e| EncrypterError(e.to_string()))?;

                match argon2()?.verify_password(
                    password_candidate.expose_secret().as_bytes(),
                    &expected_password_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(EncrypterError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| EncrypterError(e.to_string()))?
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2Encrypter {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, plain: &Secret<String>) -> Result<HashedPassword, EncrypterError> {
        let password = plain.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(&mut OsRng);
                argon2()?
                    .hash_password(password.expose_secret().as_bytes(), &salt)
                    .map(|hash| HashedPassword::from(hash.to_string()))
                    .map_err(|e| EncrypterError(e.to_string()))
            })
        })
        .await
        .map_err(|e| EncrypterError(e.to_string()))?
    }
}
