//! List Todos Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::session::Session;

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Output of list todos
#[derive(Debug, Clone)]
pub struct ListTodosOutput {
    pub user_id: UserId,
    /// Newest first
    pub todos: Vec<Todo>,
}

/// List Todos Use Case
pub struct ListTodosUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> ListTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, session: Session) -> TodoResult<ListTodosOutput> {
        let user_id = session.user_id().ok_or(TodoError::NotSignedIn)?;
        let todos = self.repo.list_by_user(user_id).await?;

        Ok(ListTodosOutput { user_id, todos })
    }
}
