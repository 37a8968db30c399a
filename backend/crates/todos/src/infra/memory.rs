//! In-Memory Repository Implementation
//!
//! Backs the test suites. Each operation runs under one lock.

use std::sync::Arc;

use kernel::id::{TodoId, UserId};
use tokio::sync::Mutex;

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoText;
use crate::error::{TodoError, TodoResult};

#[derive(Default)]
struct MemoryState {
    /// Insertion order
    todos: Vec<Todo>,
    last_id: i64,
}

/// In-memory todo repository
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, user_id: UserId, text: &TodoText) -> TodoResult<Option<Todo>> {
        let mut state = self.state.lock().await;

        if state
            .todos
            .iter()
            .any(|t| t.user_id == user_id && &t.text == text)
        {
            return Ok(None);
        }

        state.last_id += 1;
        let todo = Todo {
            id: TodoId::new(state.last_id),
            user_id,
            text: text.clone(),
            completed: false,
        };
        state.todos.push(todo.clone());

        Ok(Some(todo))
    }

    async fn list_by_user(&self, user_id: UserId) -> TodoResult<Vec<Todo>> {
        let state = self.state.lock().await;
        Ok(state
            .todos
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoResult<Option<Todo>> {
        let state = self.state.lock().await;
        Ok(state.todos.iter().find(|t| t.id == id).cloned())
    }

    async fn rename(&self, id: TodoId, text: &TodoText) -> TodoResult<bool> {
        let mut state = self.state.lock().await;

        let Some(owner) = state.todos.iter().find(|t| t.id == id).map(|t| t.user_id) else {
            return Ok(false);
        };

        if state
            .todos
            .iter()
            .any(|t| t.id != id && t.user_id == owner && &t.text == text)
        {
            return Err(TodoError::DuplicateRename);
        }

        if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
            todo.text = text.clone();
        }
        Ok(true)
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoResult<bool> {
        let mut state = self.state.lock().await;
        match state.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TodoId) -> TodoResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.todos.len();
        state.todos.retain(|t| t.id != id);
        Ok(state.todos.len() < before)
    }
}
