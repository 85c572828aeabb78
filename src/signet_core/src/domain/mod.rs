pub mod access_token;
pub mod account;
pub mod param_error;
