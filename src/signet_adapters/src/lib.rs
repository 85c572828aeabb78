pub mod config;
pub mod crypto;
pub mod http;
pub mod persistence;
pub mod token;
pub mod validation;
