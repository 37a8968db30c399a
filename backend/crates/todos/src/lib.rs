//! Todos Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Todo entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Ownership Model
//! - Every todo belongs to exactly one user
//! - The caller comes from the request [`kernel::session::Session`]
//! - Get, update and delete share a single ownership check; anonymous
//!   callers own nothing

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TodoError, TodoResult};
pub use infra::{memory::InMemoryTodoRepository, postgres::PgTodoRepository};
pub use presentation::router::{todos_router, todos_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
