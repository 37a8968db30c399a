//! Application Layer - Use cases

pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_todos;
pub mod ownership;
pub mod update_todo;

pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use delete_todo::DeleteTodoUseCase;
pub use get_todo::GetTodoUseCase;
pub use list_todos::{ListTodosOutput, ListTodosUseCase};
pub use update_todo::{UpdateTodoInput, UpdateTodoUseCase};
