//! Todo List REST API
//!
//! Composes the auth and todos routers behind the session middleware.
//! The binary in `main.rs` adds configuration, the database pool,
//! migrations, request tracing and CORS.

pub mod config;

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::{AppRepository, AuthSessionRepository, UserRepository};
use auth::middleware::{AuthMiddlewareState, load_session};
use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use axum::{Router, middleware, routing::get};
use kernel::error::app_error::AppError;
use todos::domain::repository::TodoRepository;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Body of `GET /`
pub const BANNER: &str = "WELCOME TO TODOLIST REST API";

/// Build the application router
///
/// Every request passes through [`load_session`] first, so handlers of
/// both routers see the same [`kernel::session::Session`].
pub fn build_router<A, T>(auth_repo: Arc<A>, todo_repo: Arc<T>, auth_config: Arc<AuthConfig>) -> Router
where
    A: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let session_state = AuthMiddlewareState {
        repo: auth_repo.clone(),
        config: auth_config.clone(),
    };

    let api = auth::auth_router_generic(auth_repo, auth_config)
        .merge(todos::todos_router_generic(todo_repo));

    Router::new()
        .route("/", get(banner))
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            session_state,
            load_session::<A>,
        ))
}

/// CORS for the browser frontend
///
/// Credentials are allowed, so origins must be listed explicitly.
pub fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

async fn banner() -> &'static str {
    BANNER
}

async fn not_found() -> impl IntoResponse {
    AppError::not_found("No such route.")
}
