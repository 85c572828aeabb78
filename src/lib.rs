//! # Signet - Username/Password Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `UserId`, `AccessToken`, `ParamError`
//! - **Ports**: account repositories, `Encrypter`, `PasswordHasher`, `TokenGenerator`, `EmailValidator`
//! - **Use cases**: `AuthUseCase`, `SignupUseCase`
//! - **Adapters**: `Argon2Encrypter`, `JwtTokenGenerator`, `HashMapAccountStore`, `PostgresAccountStore`, etc.
//! - **Service**: `AuthService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use signet_core::*;
}

// Re-export most commonly used core types at the root level
pub use signet_core::{AccessToken, Account, HashedPassword, ParamError, UserId};

// ============================================================================
// Ports
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use signet_core::{
        AccountStoreError, AddAccountRepository, LoadUserByEmailRepository,
        UpdateAccessTokenRepository,
    };
}

// Re-export port traits at root level
pub use signet_core::{
    AccountStoreError, AddAccountRepository, EmailValidator, Encrypter, EncrypterError,
    LoadUserByEmailRepository, PasswordHasher, TokenGenerator, TokenGeneratorError,
    UpdateAccessTokenRepository,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use signet_application::*;
}

// Re-export use cases at root level
pub use signet_application::{
    AuthError, AuthUseCase, AuthUseCaseBuildError, AuthUseCaseBuilder, SignupError,
    SignupUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use signet_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use signet_adapters::persistence::*;
    }

    /// Password hashing
    pub mod crypto {
        pub use signet_adapters::crypto::*;
    }

    /// Access token generation
    pub mod token {
        pub use signet_adapters::token::*;
    }

    /// Email syntax validation
    pub mod validation {
        pub use signet_adapters::validation::*;
    }

    /// Configuration
    pub mod config {
        pub use signet_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use signet_adapters::{
    crypto::Argon2Encrypter,
    persistence::{HashMapAccountStore, PostgresAccountStore},
    token::JwtTokenGenerator,
    validation::RegexEmailValidator,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use signet_auth_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
