//! HTTP request handlers

pub mod auth;
pub mod events;
pub mod health;
pub mod import;
pub mod profiles;
pub mod users;
