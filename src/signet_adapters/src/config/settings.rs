use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{
    CONFIG_DIR, DEFAULT_ENVIRONMENT, DEFAULT_JWT_TTL_SECONDS, JWT_COOKIE_NAME, env, prod,
};

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    #[serde(default)]
    pub postgres: Option<PostgresSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    pub time_to_live: i64,
    pub cookie_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

/// CORS origins allowed to call the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AuthServiceSetting {
    /// Loads settings from defaults, `config/<APP_ENVIRONMENT>.json` and
    /// `SIGNET__`-prefixed environment variables, later sources winning.
    ///
    /// `auth.jwt.secret` has no default and must be provided.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::with_defaults()?
            .add_source(
                File::with_name(&format!("{CONFIG_DIR}/{environment}"))
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
                    .separator(env::SETTINGS_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub(crate) fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("auth.jwt.time_to_live", DEFAULT_JWT_TTL_SECONDS)?
            .set_default("auth.jwt.cookie_name", JWT_COOKIE_NAME)?
            .set_default("auth.allowed_origins", Vec::<String>::new())
    }
}
