use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use signet_core::{AccessToken, TokenGenerator, TokenGeneratorError, UserId};

/// Issues HS256 JWT access tokens whose subject is the account id.
#[derive(Clone)]
pub struct JwtTokenGenerator {
    secret: Secret<String>,
    token_ttl_in_seconds: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

impl JwtTokenGenerator {
    pub fn new(secret: Secret<String>, token_ttl_in_seconds: i64) -> Self {
        Self {
            secret,
            token_ttl_in_seconds,
        }
    }

    /// Decodes and verifies a token produced by this generator.
    pub fn decode(&self, token: &AccessToken) -> Result<Claims, TokenGeneratorError> {
        decode::<Claims>(
            token.as_ref().expose_secret(),
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| TokenGeneratorError(e.to_string()))
    }

    fn expiry(&self) -> Result<usize, TokenGeneratorError> {
        let delta = chrono::Duration::try_seconds(self.token_ttl_in_seconds).ok_or(
            TokenGeneratorError("Failed to create auth token duration".to_string()),
        )?;

        let exp = Utc::now()
            .checked_add_signed(delta)
            .ok_or(TokenGeneratorError("Duration out of range".to_string()))?
            .timestamp();

        exp.try_into()
            .map_err(|_| TokenGeneratorError("Failed to cast i64 to usize".to_string()))
    }
}

#[async_trait::async_trait]
impl TokenGenerator for JwtTokenGenerator {
    #[tracing::instrument(name = "Generating access token", skip_all)]
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenGeneratorError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: self.expiry()?,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map(AccessToken::from)
        .map_err(|e| TokenGeneratorError(e.to_string()))
    }
}
