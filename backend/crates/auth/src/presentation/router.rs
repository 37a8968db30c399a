//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AppRepository, AuthSessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(Arc::new(repo), Arc::new(config))
}

/// Create a generic Auth router for any repository implementation
///
/// Handlers read the caller from request extensions, so the router must
/// sit behind [`load_session`](crate::presentation::middleware::load_session).
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route(
            "/login",
            get(handlers::login_status).post(handlers::login::<R>),
        )
        .route("/logout", get(handlers::logout::<R>))
        .route("/makeapp", post(handlers::make_app::<R>))
        .with_state(state)
}
