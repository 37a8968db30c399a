//! Get Todo Use Case

use std::sync::Arc;

use kernel::id::TodoId;
use kernel::session::Session;

use crate::application::ownership::load_owned;
use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoAction, TodoResult};

/// Get Todo Use Case
pub struct GetTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> GetTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: TodoId, session: Session) -> TodoResult<Todo> {
        load_owned(self.repo.as_ref(), id, &session, TodoAction::See).await
    }
}
