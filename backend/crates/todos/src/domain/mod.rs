//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Todo)
//! - Domain value objects (TodoText, TodoChange)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
