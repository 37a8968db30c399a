//! Todo Error Types
//!
//! This module provides todo-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// Operation refused to a non-owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    See,
    Update,
    Delete,
}

impl TodoAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoAction::See => "see",
            TodoAction::Update => "update",
            TodoAction::Delete => "delete",
        }
    }
}

/// Todo-specific error variants
#[derive(Debug, Error)]
pub enum TodoError {
    /// Field failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Body is not valid JSON or has fields of the wrong type
    #[error("Invalid request body.")]
    MalformedBody,

    /// Create without todo text
    #[error("Please provide a todo.")]
    MissingTodo,

    /// List/create without a session
    #[error("Be logged in to use this route.")]
    NotSignedIn,

    #[error("Such todo of yours already exists.")]
    DuplicateTodo,

    #[error("You are trying to update the todo value to be an already existing todo.")]
    DuplicateRename,

    /// Update carrying both `todo` and `completed`
    #[error("You cannot update and mark as complete at the same time.")]
    ConflictingUpdate,

    /// Todo owned by someone else, or caller is anonymous
    #[error("Be logged in or You cannot {} todo of others.", .0.as_str())]
    NotOwner(TodoAction),

    #[error("Such id of todo does not exist.")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::InvalidInput(_)
            | TodoError::MalformedBody
            | TodoError::MissingTodo
            | TodoError::DuplicateTodo
            | TodoError::DuplicateRename
            | TodoError::ConflictingUpdate => ErrorKind::BadRequest,
            TodoError::NotSignedIn => ErrorKind::Unauthorized,
            TodoError::NotOwner(_) => ErrorKind::Forbidden,
            TodoError::NotFound => ErrorKind::NotFound,
            TodoError::Database(_) | TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures never expose their details.
    pub fn to_app_error(&self) -> AppError {
        match self {
            TodoError::Database(_) | TodoError::Internal(_) => {
                AppError::internal("Something went wrong. Please try again later.")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TodoError::Database(e) => {
                tracing::error!(error = %e, "Todo database error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            TodoError::NotOwner(action) => {
                tracing::debug!(action = action.as_str(), "Todo access refused");
            }
            _ => {
                tracing::debug!(error = %self, "Todo error");
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value objects report validation failures as `AppError`
impl From<AppError> for TodoError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => TodoError::InvalidInput(err.message().to_string()),
            _ => TodoError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
        TodoError::MalformedBody
    }
}

/// A non-numeric id names no todo
impl From<PathRejection> for TodoError {
    fn from(_: PathRejection) -> Self {
        TodoError::NotFound
    }
}
