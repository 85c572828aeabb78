pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::AccessToken,
    account::{Account, HashedPassword, UserId},
    param_error::ParamError,
};

pub use ports::{
    repositories::{
        AccountStoreError, AddAccountRepository, LoadUserByEmailRepository,
        UpdateAccessTokenRepository,
    },
    services::{
        EmailValidator, Encrypter, EncrypterError, PasswordHasher, TokenGenerator,
        TokenGeneratorError,
    },
};
