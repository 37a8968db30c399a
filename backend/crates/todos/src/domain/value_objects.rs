//! Domain Value Objects

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

use crate::error::{TodoError, TodoResult};

/// Maximum todo text length (in characters)
pub const TODO_TEXT_MAX_LENGTH: usize = 500;

/// Todo text; compared exactly (case-sensitive, untrimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoText(String);

impl TodoText {
    pub fn new(text: impl Into<String>) -> AppResult<Self> {
        let text = text.into();

        if text.is_empty() {
            return Err(AppError::bad_request("Todo cannot be empty"));
        }

        if text.chars().count() > TODO_TEXT_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Todo must be at most {} characters",
                TODO_TEXT_MAX_LENGTH
            )));
        }

        Ok(Self(text))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Requested modification of a todo: text or completion, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoChange {
    Nothing,
    Rename(TodoText),
    SetCompleted(bool),
}

impl TodoChange {
    /// Build from the optional request fields
    pub fn from_fields(todo: Option<String>, completed: Option<bool>) -> TodoResult<Self> {
        match (todo, completed) {
            (Some(_), Some(_)) => Err(TodoError::ConflictingUpdate),
            (Some(text), None) => Ok(TodoChange::Rename(TodoText::new(text)?)),
            (None, Some(completed)) => Ok(TodoChange::SetCompleted(completed)),
            (None, None) => Ok(TodoChange::Nothing),
        }
    }
}
