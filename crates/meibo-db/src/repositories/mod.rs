//! PostgreSQL repository implementations

pub mod error;

mod event;
mod profile;
mod user;

pub use event::PgEventRepository;
pub use profile::PgProfileRepository;
pub use user::PgUserRepository;
