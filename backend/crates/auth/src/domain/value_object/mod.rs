//! Value Object Module

pub mod app_name;
pub mod email;
pub mod user_name;
pub mod user_password;
