//! In-Memory Repository Implementation
//!
//! Backs the test suites. Each operation runs under one lock.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{AppId, UserId};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entity::{
    app::App,
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::repository::{AppRepository, AuthSessionRepository, UserRepository};
use crate::domain::value_object::{app_name::AppName, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct MemoryState {
    apps: Vec<App>,
    users: Vec<User>,
    sessions: HashMap<Uuid, AuthSession>,
    last_app_id: i64,
    last_user_id: i64,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored session rows, expired ones included
    pub async fn session_count(&self) -> usize {
        self.state.lock().await.sessions.len()
    }

    /// Store a session row as-is (lets tests plant expired sessions)
    pub async fn insert_session(&self, session: AuthSession) {
        self.state
            .lock()
            .await
            .sessions
            .insert(session.session_id, session);
    }
}

impl AppRepository for InMemoryAuthRepository {
    async fn create(&self, name: &AppName) -> AuthResult<Option<App>> {
        let mut state = self.state.lock().await;

        if state.apps.iter().any(|app| &app.name == name) {
            return Ok(None);
        }

        state.last_app_id += 1;
        let app = App {
            id: AppId::new(state.last_app_id),
            name: name.clone(),
        };
        state.apps.push(app.clone());

        Ok(Some(app))
    }

    async fn find_by_name(&self, name: &AppName) -> AuthResult<Option<App>> {
        let state = self.state.lock().await;
        Ok(state.apps.iter().find(|app| &app.name == name).cloned())
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut state = self.state.lock().await;

        let same_app: Vec<&User> = state
            .users
            .iter()
            .filter(|u| u.app_id == user.app_id)
            .collect();

        if same_app.iter().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UsernameTaken);
        }
        if same_app.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        state.last_user_id += 1;
        let user = user.into_user(UserId::new(state.last_user_id));
        state.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_user_name(
        &self,
        app_id: AppId,
        user_name: &UserName,
    ) -> AuthResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.app_id == app_id && &u.user_name == user_name)
            .cloned())
    }
}

impl AuthSessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.insert_session(session.clone()).await;
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let state = self.state.lock().await;
        Ok(state
            .sessions
            .get(&session_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<bool> {
        let mut state = self.state.lock().await;
        Ok(state.sessions.remove(&session_id).is_some())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut state = self.state.lock().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| !s.is_expired());
        Ok((before - state.sessions.len()) as u64)
    }
}
