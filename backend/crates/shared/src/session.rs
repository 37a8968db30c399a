//! Request Session
//!
//! The caller identity resolved from the session cookie. A client context is
//! either anonymous or bound to exactly one user; login and logout are the
//! only transitions between the two.

use uuid::Uuid;

use crate::id::UserId;

/// Session attached to every request by the auth middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    /// No valid session cookie
    #[default]
    Anonymous,
    /// Signed cookie pointing at a live server-side session row
    Authenticated { session_id: Uuid, user_id: UserId },
}

impl Session {
    /// Logged-in user, if any
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    /// Server-side session row, if any
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { session_id, .. } => Some(*session_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Reads the session stored in request extensions.
///
/// Falls back to [`Session::Anonymous`] when no middleware resolved one, so
/// handlers never fail on extraction.
#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Session>()
            .copied()
            .unwrap_or_default())
    }
}
