use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use signet_adapters::{
    config::AllowedOrigins,
    http::routes::{LoginState, login, signup},
};
use signet_application::AuthUseCase;
use signet_core::{AddAccountRepository, EmailValidator, PasswordHasher};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides the sign-up and login routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService
    ///
    /// # Arguments
    /// * `auth_use_case` - Fully wired auth use case, see [`AuthUseCase::builder`]
    /// * `account_store` - Store new accounts are added to (must be Clone)
    /// * `password_hasher` - Hashes passwords before they are stored
    /// * `email_validator` - Syntax check shared by both routes
    /// * `cookie_name` - Name of the cookie carrying the access token
    ///
    /// # Note on Architecture
    /// Each route is given only the state it needs.
    pub fn new<A, H, V>(
        auth_use_case: AuthUseCase,
        account_store: A,
        password_hasher: H,
        email_validator: V,
        cookie_name: String,
    ) -> Self
    where
        A: AddAccountRepository + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        V: EmailValidator + Clone + 'static,
    {
        let login_state = LoginState {
            auth_use_case: Arc::new(auth_use_case),
            email_validator: email_validator.clone(),
            cookie_name,
        };

        let router = Router::new()
            // Signup needs the account store, the hasher and the email validator
            .route("/signup", post(signup::<A, H, V>))
            .with_state((account_store, password_hasher, email_validator))
            // Login needs the auth use case and the email validator
            .route("/login", post(login::<V>))
            .with_state(login_state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
