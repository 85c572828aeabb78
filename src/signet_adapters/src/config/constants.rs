pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const SETTINGS_ENV_PREFIX: &str = "SIGNET";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub const JWT_COOKIE_NAME: &str = "jwt";
pub const DEFAULT_JWT_TTL_SECONDS: i64 = 600;
pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const CONFIG_DIR: &str = "config";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
