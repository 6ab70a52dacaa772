//! # gately_api
//!
//! HTTP API library for Gately.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use gately_core::keys::KeyMaterial;
use gately_core::store::AuthStore;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, users};

/// Shared application state passed to all handlers.
///
/// Everything the auth flows depend on is injected here; there is no
/// package-level mutable state.
#[derive(Clone)]
pub struct AppState {
    /// User and token persistence.
    pub store: Arc<dyn AuthStore>,
    /// API configuration.
    pub config: ApiConfig,
    /// Signing keypair, provisioned once at startup.
    pub keys: Arc<KeyMaterial>,
}

/// Run embedded database migrations.
///
/// Delegates to `gately_core::migrate::migrate()` which owns the
/// migration files.
pub use gately_core::migrate::migrate;

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/auth/login", post(auth::login_handler))
        .route("/users", post(users::register_handler));

    // Protected routes (require a valid bearer token)
    let protected = Router::new()
        .route("/users/me", get(users::me_handler))
        .route("/users/{id}", delete(users::delete_user_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
