//! Auth Session Entity
//!
//! Represents an authenticated user session.
//! Stored in database with cookie-based token reference.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use kernel::session::Session;
use uuid::Uuid;

/// Auth session entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }

    /// Request-level view of this session
    pub fn as_session(&self) -> Session {
        Session::Authenticated {
            session_id: self.session_id,
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_live() {
        let session = AuthSession::new(UserId::new(1), Duration::hours(1));
        assert!(!session.is_expired());
        assert_eq!(session.as_session().user_id(), Some(UserId::new(1)));
        assert_eq!(session.as_session().session_id(), Some(session.session_id));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let session = AuthSession::new(UserId::new(1), Duration::zero());
        assert!(session.is_expired());
    }
}
