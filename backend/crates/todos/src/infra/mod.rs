//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTodoRepository;
pub use postgres::PgTodoRepository;
