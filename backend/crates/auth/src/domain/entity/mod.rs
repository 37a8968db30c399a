//! Entity Module

pub mod app;
pub mod auth_session;
pub mod user;
