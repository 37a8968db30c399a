//! Delete Todo Use Case

use std::sync::Arc;

use kernel::id::TodoId;
use kernel::session::Session;

use crate::application::ownership::load_owned;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoAction, TodoError, TodoResult};

/// Delete Todo Use Case
pub struct DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: TodoId, session: Session) -> TodoResult<()> {
        load_owned(self.repo.as_ref(), id, &session, TodoAction::Delete).await?;

        // Deleted concurrently since the ownership check
        if !self.repo.delete(id).await? {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = %id, "Todo deleted");
        Ok(())
    }
}
