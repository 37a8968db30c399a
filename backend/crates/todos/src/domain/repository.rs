//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{TodoId, UserId};

use crate::domain::entities::Todo;
use crate::domain::value_objects::TodoText;
use crate::error::TodoResult;

/// Todo repository trait
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// Insert a todo with `completed = false`
    ///
    /// Returns `None` if the user already has a todo with this exact text.
    /// Check and insert are one atomic step.
    async fn create(&self, user_id: UserId, text: &TodoText) -> TodoResult<Option<Todo>>;

    /// All todos of a user, newest first
    async fn list_by_user(&self, user_id: UserId) -> TodoResult<Vec<Todo>>;

    /// Find todo by ID
    async fn find_by_id(&self, id: TodoId) -> TodoResult<Option<Todo>>;

    /// Replace the text
    ///
    /// `Ok(false)` if the todo no longer exists; `DuplicateRename` if the
    /// owner already has another todo with this text.
    async fn rename(&self, id: TodoId, text: &TodoText) -> TodoResult<bool>;

    /// Set the completion flag; `Ok(false)` if the todo no longer exists
    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoResult<bool>;

    /// Delete a todo; `Ok(false)` if it did not exist
    async fn delete(&self, id: TodoId) -> TodoResult<bool>;
}
