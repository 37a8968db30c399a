//! Shared lookup for single-todo operations

use kernel::id::TodoId;
use kernel::session::Session;

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoAction, TodoError, TodoResult};

/// Load a todo the caller owns
///
/// `NotFound` for an unknown id, otherwise `NotOwner` unless the session's
/// user owns it.
pub async fn load_owned<R>(
    repo: &R,
    id: TodoId,
    session: &Session,
    action: TodoAction,
) -> TodoResult<Todo>
where
    R: TodoRepository,
{
    let todo = repo.find_by_id(id).await?.ok_or(TodoError::NotFound)?;

    if !todo.is_owned_by(session) {
        return Err(TodoError::NotOwner(action));
    }

    Ok(todo)
}
