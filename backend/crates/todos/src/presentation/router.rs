//! Todos Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::infra::postgres::PgTodoRepository;
use crate::presentation::handlers::{self, TodoAppState};

/// Create the Todos router with PostgreSQL repository
pub fn todos_router(repo: PgTodoRepository) -> Router {
    todos_router_generic(Arc::new(repo))
}

/// Create a generic Todos router for any repository implementation
///
/// Handlers read the caller's [`kernel::session::Session`] from request
/// extensions; without the auth middleware every caller is anonymous.
pub fn todos_router_generic<R>(repo: Arc<R>) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let state = TodoAppState { repo };

    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<R>)
                .put(handlers::update_todo::<R>)
                .delete(handlers::delete_todo::<R>),
        )
        .with_state(state)
}
