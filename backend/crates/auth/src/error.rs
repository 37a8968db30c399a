//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Field failed value validation
    #[error("{0}")]
    InvalidInput(String),

    /// Body is not valid JSON or has fields of the wrong type
    #[error("Invalid request body.")]
    MalformedBody,

    /// Registration without every field
    #[error("You didn't provide all the credentials")]
    MissingCredentials,

    /// Login without an app name
    #[error("Please provide your app name.")]
    MissingAppName,

    /// Login without username/password, or with an unknown app
    #[error("You did not submit username and/ or password and/ or valid app name")]
    MissingLoginFields,

    /// App creation without a name
    #[error("Please provide a app name in the form data.")]
    MissingNewAppName,

    #[error("Such app name is already taken. Try another one.")]
    AppNameTaken,

    #[error("Your provided app name does not exist.")]
    AppNotFound,

    #[error("Such username already exists.")]
    UsernameTaken,

    #[error("Such email already exists.")]
    EmailTaken,

    /// Invalid credentials (unknown user or wrong password)
    #[error("Invalid username and/ or password.")]
    InvalidCredentials,

    #[error("Please first logout to register a new user.")]
    LogoutRequiredToRegister,

    #[error("Please first logout to log back in again.")]
    AlreadySignedIn,

    #[error("You are not logged in.")]
    NotSignedIn,

    #[error("Error! You are not logged in to be logged out.")]
    NoSessionToClear,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_)
            | AuthError::MalformedBody
            | AuthError::MissingCredentials
            | AuthError::MissingAppName
            | AuthError::MissingLoginFields
            | AuthError::MissingNewAppName
            | AuthError::AppNameTaken
            | AuthError::UsernameTaken
            | AuthError::EmailTaken
            | AuthError::LogoutRequiredToRegister
            | AuthError::NoSessionToClear => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::NotSignedIn => ErrorKind::Unauthorized,
            AuthError::AlreadySignedIn => ErrorKind::Forbidden,
            AuthError::AppNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures never expose their details.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Something went wrong. Please try again later.")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value objects report validation failures as `AppError`
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidInput(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
        AuthError::MalformedBody
    }
}
