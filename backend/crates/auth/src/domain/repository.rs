//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AppId;
use uuid::Uuid;

use crate::domain::entity::{
    app::App,
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::value_object::{app_name::AppName, user_name::UserName};
use crate::error::AuthResult;

/// App (tenant) repository trait
#[trait_variant::make(AppRepository: Send)]
pub trait LocalAppRepository {
    /// Insert a new app
    ///
    /// Returns `None` when the name is already taken. Check and insert are
    /// one atomic step.
    async fn create(&self, name: &AppName) -> AuthResult<Option<App>>;

    /// Find app by exact name
    async fn find_by_name(&self, name: &AppName) -> AuthResult<Option<App>>;
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Fails with `UsernameTaken` if (app, username) exists, otherwise with
    /// `EmailTaken` if (app, email) exists. Checks and insert are atomic.
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by user name within an app
    async fn find_by_user_name(
        &self,
        app_id: AppId,
        user_name: &UserName,
    ) -> AuthResult<Option<User>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find an unexpired session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Delete a session; `false` if it did not exist
    async fn delete(&self, session_id: Uuid) -> AuthResult<bool>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
