//! HTTP application wiring (axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store/service/token wiring shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use nordwear_auth::TokenVerifier;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(config: ApiConfig) -> Router {
    let auth_state = middleware::AuthState {
        verifier: Arc::new(TokenVerifier::new(config.jwt_secret.as_bytes())),
    };

    let services = Arc::new(services::build_services(&config));

    // Write routes require a bearer token; reads and login stay public.
    let writes = routes::write_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::require_bearer,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(writes)
        .layer(Extension(services))
}
