//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use kernel::response::{NoData, Success};
use kernel::session::Session;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CreateAppInput, CreateAppUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput,
    SignUpUseCase,
};
use crate::domain::repository::{AppRepository, AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, MakeAppRequest, MakeAppResponse, RegisterRequest, SessionStatusResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    session: Session,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Success<NoData>>
where
    R: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: req.username,
        email: req.email,
        password: req.password,
        app_name: req.app_name,
    };

    use_case.execute(session, input).await?;

    Ok(Success::message("You are successfully registered."))
}

// ============================================================================
// Login
// ============================================================================

/// GET /api/login
pub async fn login_status(session: Session) -> AuthResult<impl IntoResponse> {
    let user_id = session.user_id().ok_or(AuthError::NotSignedIn)?;

    Ok(Success::with(
        "You are logged in.",
        SessionStatusResponse {
            userid: user_id.get(),
        },
    ))
}

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    session: Session,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: req.username,
        password: req.password,
        app_name: req.app_name,
    };

    let output = use_case.execute(session, input).await?;

    let cookie = state
        .config
        .cookie_config()
        .set_cookie_header(&output.session_token)
        .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Success::message("Successfully logged in."),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    session: Session,
) -> AuthResult<impl IntoResponse>
where
    R: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone());
    use_case.execute(session).await?;

    let cookie = state
        .config
        .cookie_config()
        .delete_cookie_header()
        .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Success::message("You are successfully logged out."),
    ))
}

// ============================================================================
// Make App
// ============================================================================

/// POST /api/makeapp
pub async fn make_app<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<MakeAppRequest>, JsonRejection>,
) -> AuthResult<Success<MakeAppResponse>>
where
    R: AppRepository + UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = CreateAppUseCase::new(state.repo.clone());
    let app = use_case
        .execute(CreateAppInput {
            app_name: req.app_name,
        })
        .await?;

    Ok(Success::with(
        "Successfully created your app.",
        MakeAppResponse {
            app_name: app.name.to_string(),
        },
    ))
}
