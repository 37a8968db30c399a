//! Check Session Use Case
//!
//! Resolves a session cookie into the request [`Session`].

use std::sync::Arc;

use kernel::session::Session;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Look up the live session behind a cookie value
    ///
    /// Bad signatures and unknown or expired rows yield `Anonymous`; only
    /// storage failures are errors.
    pub async fn execute(&self, token: &str) -> AuthResult<Session> {
        let Some(session_id) = self.parse_session_token(token) else {
            return Ok(Session::Anonymous);
        };

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .filter(|s| !s.is_expired())
            .map(|s| s.as_session())
            .unwrap_or_default();

        Ok(session)
    }

    /// Resolve an optional cookie; never fails
    pub async fn resolve(&self, token: Option<&str>) -> Session {
        let Some(token) = token else {
            return Session::Anonymous;
        };

        match self.execute(token).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed; treating request as anonymous");
                Session::Anonymous
            }
        }
    }

    /// Parse and verify session token
    fn parse_session_token(&self, token: &str) -> Option<Uuid> {
        platform::crypto::verify_token(&self.config.session_secret, token)
            .ok()?
            .parse()
            .ok()
    }
}
