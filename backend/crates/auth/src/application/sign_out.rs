//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use kernel::session::Session;

use crate::domain::repository::AuthSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Sign out from current session
    pub async fn execute(&self, session: Session) -> AuthResult<()> {
        let (Some(session_id), Some(user_id)) = (session.session_id(), session.user_id()) else {
            return Err(AuthError::NoSessionToClear);
        };

        // A row removed concurrently still counts as signed out
        if !self.session_repo.delete(session_id).await? {
            tracing::debug!(session_id = %session_id, "Session row already gone");
        }

        tracing::info!(user_id = %user_id, session_id = %session_id, "User signed out");
        Ok(())
    }
}
