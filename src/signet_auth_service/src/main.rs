use std::sync::Arc;

use color_eyre::eyre::Result;
use signet_adapters::{
    config::AuthServiceSetting,
    crypto::Argon2Encrypter,
    persistence::{HashMapAccountStore, PostgresAccountStore},
    token::JwtTokenGenerator,
    validation::RegexEmailValidator,
};
use signet_application::AuthUseCase;
use signet_auth_service::{AuthService, configure_postgresql, telemetry::init_tracing};
use signet_core::{AddAccountRepository, LoadUserByEmailRepository, UpdateAccessTokenRepository};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = AuthServiceSetting::load()?;
    let listener = TcpListener::bind(&config.application.address).await?;

    match &config.postgres {
        Some(postgres) => {
            let pg_pool = configure_postgresql(&postgres.url).await?;
            serve(PostgresAccountStore::new(pg_pool), &config, listener).await
        }
        None => {
            tracing::warn!("postgres.url is not set, accounts are kept in memory");
            serve(HashMapAccountStore::new(), &config, listener).await
        }
    }
}

async fn serve<S>(account_store: S, config: &AuthServiceSetting, listener: TcpListener) -> Result<()>
where
    S: LoadUserByEmailRepository
        + UpdateAccessTokenRepository
        + AddAccountRepository
        + Clone
        + 'static,
{
    let encrypter = Argon2Encrypter::new();
    let token_generator =
        JwtTokenGenerator::new(config.auth.jwt.secret.clone(), config.auth.jwt.time_to_live);

    let auth_use_case = AuthUseCase::builder()
        .load_user_by_email_repository(Arc::new(account_store.clone()))
        .encrypter(Arc::new(encrypter.clone()))
        .token_generator(Arc::new(token_generator))
        .update_access_token_repository(Arc::new(account_store.clone()))
        .build()?;

    let auth_service = AuthService::new(
        auth_use_case,
        account_store,
        encrypter,
        RegexEmailValidator::new(),
        config.auth.jwt.cookie_name.clone(),
    );

    let allowed_origins =
        (!config.auth.allowed_origins.is_empty()).then(|| config.auth.allowed_origins.clone());

    auth_service
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}
