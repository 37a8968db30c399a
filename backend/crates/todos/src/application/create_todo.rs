//! Create Todo Use Case

use std::sync::Arc;

use kernel::session::Session;

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoText;
use crate::error::{TodoError, TodoResult};

/// Input for create todo
pub struct CreateTodoInput {
    pub todo: Option<String>,
}

/// Create Todo Use Case
pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, session: Session, input: CreateTodoInput) -> TodoResult<Todo> {
        // Text is validated before the session is looked at
        let raw = input
            .todo
            .filter(|t| !t.is_empty())
            .ok_or(TodoError::MissingTodo)?;
        let text = TodoText::new(raw)?;

        let user_id = session.user_id().ok_or(TodoError::NotSignedIn)?;

        let todo = self
            .repo
            .create(user_id, &text)
            .await?
            .ok_or(TodoError::DuplicateTodo)?;

        tracing::info!(todo_id = %todo.id, user_id = %user_id, "Todo created");

        Ok(todo)
    }
}
