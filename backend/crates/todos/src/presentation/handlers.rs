//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use kernel::id::TodoId;
use kernel::response::{NoData, Success};
use kernel::session::Session;
use std::sync::Arc;

use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodosUseCase,
    UpdateTodoInput, UpdateTodoUseCase,
};
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;
use crate::presentation::dto::{CreateTodoRequest, TodoItem, TodoListResponse, UpdateTodoRequest};

/// Shared state for todo handlers
#[derive(Clone)]
pub struct TodoAppState<R>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Collection
// ============================================================================

/// GET /api/todos
pub async fn list_todos<R>(
    State(state): State<TodoAppState<R>>,
    session: Session,
) -> TodoResult<Success<TodoListResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let output = ListTodosUseCase::new(state.repo.clone())
        .execute(session)
        .await?;

    Ok(Success::with(
        "Successfully got all todos.",
        TodoListResponse {
            userid: output.user_id.get(),
            todos: output.todos.into_iter().map(TodoItem::from).collect(),
        },
    ))
}

/// POST /api/todos
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    session: Session,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> TodoResult<Success<NoData>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    CreateTodoUseCase::new(state.repo.clone())
        .execute(session, CreateTodoInput { todo: req.todo })
        .await?;

    Ok(Success::message("Successfully posted data."))
}

// ============================================================================
// Single item
// ============================================================================

/// GET /api/todos/{id}
pub async fn get_todo<R>(
    State(state): State<TodoAppState<R>>,
    session: Session,
    id: Result<Path<i64>, PathRejection>,
) -> TodoResult<Success<TodoItem>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;

    let todo = GetTodoUseCase::new(state.repo.clone())
        .execute(TodoId::new(id), session)
        .await?;

    Ok(Success::with(
        "Successfully got required todo.",
        TodoItem::from(todo),
    ))
}

/// PUT /api/todos/{id}
pub async fn update_todo<R>(
    State(state): State<TodoAppState<R>>,
    session: Session,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> TodoResult<Success<NoData>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = payload?;

    let input = UpdateTodoInput {
        todo: req.todo,
        completed: req.completed,
    };

    UpdateTodoUseCase::new(state.repo.clone())
        .execute(TodoId::new(id), session, input)
        .await?;

    Ok(Success::message("Successfully updated the todo data."))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    session: Session,
    id: Result<Path<i64>, PathRejection>,
) -> TodoResult<Success<NoData>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;

    DeleteTodoUseCase::new(state.repo.clone())
        .execute(TodoId::new(id), session)
        .await?;

    Ok(Success::message("Successfully deleted the todo."))
}
