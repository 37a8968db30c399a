//! User Name Value Object
//!
//! ユーザー名はテナント（アプリ）内でユーザーを識別するログイン名。
//!
//! ## 不変条件
//! - 空文字列は不可
//! - 長さ: 最大 100 文字（カラム幅）
//! - 入力そのままを保持する（大文字小文字を区別）

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(user_name: impl Into<String>) -> AppResult<Self> {
        let user_name = user_name.into();

        if user_name.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        if user_name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(user_name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
