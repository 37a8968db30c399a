//! App Name Value Object
//!
//! Name of a registered client application (tenant). Matched exactly:
//! no trimming or case folding, so `Demo` and `demo` are distinct tenants.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum app name length (in characters)
pub const APP_NAME_MAX_LENGTH: usize = 50;

/// App name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    /// Create a new app name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::bad_request("App name cannot be empty"));
        }

        if name.chars().count() > APP_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "App name must be at most {} characters",
                APP_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
