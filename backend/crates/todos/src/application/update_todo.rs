//! Update Todo Use Case
//!
//! Renames a todo or sets its completion flag, never both at once.

use std::sync::Arc;

use kernel::id::TodoId;
use kernel::session::Session;

use crate::application::ownership::load_owned;
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoChange;
use crate::error::{TodoAction, TodoError, TodoResult};

/// Input for update todo
pub struct UpdateTodoInput {
    pub todo: Option<String>,
    pub completed: Option<bool>,
}

/// Update Todo Use Case
pub struct UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: TodoId,
        session: Session,
        input: UpdateTodoInput,
    ) -> TodoResult<()> {
        let todo = load_owned(self.repo.as_ref(), id, &session, TodoAction::Update).await?;

        match TodoChange::from_fields(input.todo, input.completed)? {
            TodoChange::Nothing => {}
            // Renaming to its own current text is a no-op
            TodoChange::Rename(text) if text == todo.text => {}
            TodoChange::Rename(text) => {
                if !self.repo.rename(id, &text).await? {
                    return Err(TodoError::NotFound);
                }
                tracing::info!(todo_id = %id, "Todo renamed");
            }
            TodoChange::SetCompleted(completed) => {
                if !self.repo.set_completed(id, completed).await? {
                    return Err(TodoError::NotFound);
                }
                tracing::info!(todo_id = %id, completed, "Todo completion updated");
            }
        }

        Ok(())
    }
}
