//! Axum route handlers.
//!
//! Routes extract the request body, call the use cases and map the results
//! to status codes through [`AuthApiError`].

pub mod error;
pub mod login;
pub mod signup;

pub use error::{AuthApiError, ErrorResponse};
pub use login::{LoginRequest, LoginResponse, LoginState, login};
pub use signup::{SignupRequest, SignupResponse, signup};
