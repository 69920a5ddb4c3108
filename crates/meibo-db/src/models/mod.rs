//! Database models with SQLx `FromRow` derives

mod event;
mod profile;
mod user;

pub use event::EventModel;
pub use profile::ProfileModel;
pub use user::UserModel;
