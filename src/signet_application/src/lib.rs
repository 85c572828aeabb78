pub mod use_cases;

pub use use_cases::{
    auth::{AuthError, AuthUseCase, AuthUseCaseBuildError, AuthUseCaseBuilder},
    signup::{SignupError, SignupUseCase},
};
