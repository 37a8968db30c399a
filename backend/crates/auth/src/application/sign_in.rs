//! Sign In Use Case
//!
//! Verifies credentials and opens a server-side session.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::session::Session;

use crate::application::config::AuthConfig;
use crate::application::sign_up::present;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AppRepository, AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    app_name::AppName, user_name::UserName, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub app_name: Option<String>,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed cookie value
    pub session_token: String,
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<A, U, S>
where
    A: AppRepository,
    U: UserRepository,
    S: AuthSessionRepository,
{
    app_repo: Arc<A>,
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, U, S> SignInUseCase<A, U, S>
where
    A: AppRepository,
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(
        app_repo: Arc<A>,
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            app_repo,
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session: Session, input: SignInInput) -> AuthResult<SignInOutput> {
        // Re-login needs an explicit logout first
        if session.is_authenticated() {
            return Err(AuthError::AlreadySignedIn);
        }

        let app_name = present(input.app_name).ok_or(AuthError::MissingAppName)?;
        let app = match AppName::new(app_name) {
            Ok(name) => self.app_repo.find_by_name(&name).await?,
            Err(_) => None,
        };

        let (Some(user_name), Some(password), Some(app)) =
            (present(input.user_name), present(input.password), app)
        else {
            return Err(AuthError::MissingLoginFields);
        };

        // Values that could never have been registered cannot match
        let user_name = UserName::new(user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(app.id, &user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let auth_session = AuthSession::new(user.id, self.config.session_ttl_chrono());
        self.session_repo.create(&auth_session).await?;

        let session_token = generate_session_token(&self.config, &auth_session)?;

        tracing::info!(
            user_id = %user.id,
            app_id = %app.id,
            session_id = %auth_session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: user.id,
        })
    }
}

/// Generate signed session token
pub(crate) fn generate_session_token(
    config: &AuthConfig,
    session: &AuthSession,
) -> AuthResult<String> {
    platform::crypto::sign_token(&config.session_secret, &session.session_id.to_string())
        .map_err(|e| AuthError::Internal(format!("Failed to sign session token: {}", e)))
}
