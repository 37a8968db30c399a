//! User Entity
//!
//! An account scoped to one app. Username and email are unique per app,
//! not globally.

use kernel::id::{AppId, UserId};

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Owning tenant
    pub app_id: AppId,
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

/// User awaiting its database id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub app_id: AppId,
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

impl NewUser {
    /// Attach the id assigned on insert
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            app_id: self.app_id,
            user_name: self.user_name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
