//! App Entity
//!
//! A registered client application (tenant). Immutable once created.

use kernel::id::AppId;

use crate::domain::value_object::app_name::AppName;

/// App entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub id: AppId,
    /// Globally unique
    pub name: AppName,
}
