//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::Todo;

/// Create todo request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub todo: Option<String>,
}

/// Update todo request
///
/// `completed` must be a JSON boolean.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub todo: Option<String>,
    pub completed: Option<bool>,
}

/// Single todo as exposed over HTTP
#[derive(Debug, Clone, Serialize)]
pub struct TodoItem {
    pub id: i64,
    pub todo: String,
    pub completed: bool,
}

impl From<Todo> for TodoItem {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.get(),
            todo: todo.text.into_inner(),
            completed: todo.completed,
        }
    }
}

/// Todo list response (extra fields of the success envelope)
#[derive(Debug, Clone, Serialize)]
pub struct TodoListResponse {
    pub userid: i64,
    pub todos: Vec<TodoItem>,
}
