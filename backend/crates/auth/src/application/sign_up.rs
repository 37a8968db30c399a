//! Sign Up Use Case
//!
//! Registers a user under an existing app.

use std::sync::Arc;

use kernel::session::Session;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::{AppRepository, UserRepository};
use crate::domain::value_object::{
    app_name::AppName,
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub app_name: Option<String>,
}

/// Sign up use case
pub struct SignUpUseCase<A, U>
where
    A: AppRepository,
    U: UserRepository,
{
    app_repo: Arc<A>,
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<A, U> SignUpUseCase<A, U>
where
    A: AppRepository,
    U: UserRepository,
{
    pub fn new(app_repo: Arc<A>, user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            app_repo,
            user_repo,
            config,
        }
    }

    pub async fn execute(&self, session: Session, input: SignUpInput) -> AuthResult<()> {
        if session.is_authenticated() {
            return Err(AuthError::LogoutRequiredToRegister);
        }

        let (Some(user_name), Some(email), Some(password), Some(app_name)) = (
            present(input.user_name),
            present(input.email),
            present(input.password),
            present(input.app_name),
        ) else {
            return Err(AuthError::MissingCredentials);
        };

        let user_name = UserName::new(user_name)?;
        let email = Email::new(email)?;
        let raw_password = RawPassword::new(password)?;

        // An over-long name cannot belong to any app
        let app_name = AppName::new(app_name).map_err(|_| AuthError::AppNotFound)?;
        let app = self
            .app_repo
            .find_by_name(&app_name)
            .await?
            .ok_or(AuthError::AppNotFound)?;

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self
            .user_repo
            .create(NewUser {
                app_id: app.id,
                user_name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            app_id = %app.id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(())
    }
}

/// Treat `""` like an absent field
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
