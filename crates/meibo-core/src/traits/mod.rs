//! Repository traits (ports)

mod repositories;

pub use repositories::{EventRepository, ProfileRepository, RepoResult, UserRepository};
