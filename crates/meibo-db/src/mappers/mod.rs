//! Model ↔ entity mappers

mod event;
mod profile;
mod user;
