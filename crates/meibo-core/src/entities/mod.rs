//! Domain entities - the stored document types

mod event;
mod profile;
mod user;

pub use event::Event;
pub use profile::Profile;
pub use user::User;
