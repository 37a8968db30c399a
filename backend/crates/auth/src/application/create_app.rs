//! Create App Use Case
//!
//! Registers a new client application (tenant).

use std::sync::Arc;

use crate::domain::entity::app::App;
use crate::domain::repository::AppRepository;
use crate::domain::value_object::app_name::AppName;
use crate::error::{AuthError, AuthResult};

/// Create app input
pub struct CreateAppInput {
    pub app_name: Option<String>,
}

/// Create app use case
pub struct CreateAppUseCase<A>
where
    A: AppRepository,
{
    app_repo: Arc<A>,
}

impl<A> CreateAppUseCase<A>
where
    A: AppRepository,
{
    pub fn new(app_repo: Arc<A>) -> Self {
        Self { app_repo }
    }

    pub async fn execute(&self, input: CreateAppInput) -> AuthResult<App> {
        let raw = input
            .app_name
            .filter(|name| !name.is_empty())
            .ok_or(AuthError::MissingNewAppName)?;
        let name = AppName::new(raw)?;

        let app = self
            .app_repo
            .create(&name)
            .await?
            .ok_or(AuthError::AppNameTaken)?;

        tracing::info!(app_id = %app.id, app_name = %app.name, "App created");

        Ok(app)
    }
}
