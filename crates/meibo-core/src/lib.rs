//! # meibo-core
//!
//! Domain layer containing entities, value objects, the namecard field
//! parser, and repository traits. This crate has zero dependencies on
//! infrastructure (database, web framework, OCR tooling, etc.).

pub mod entities;
pub mod error;
pub mod namecard;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Event, Profile, User};
pub use error::DomainError;
pub use namecard::{estimate_gender, parse_namecard, placeholder_image, Gender, NamecardFields};
pub use traits::{EventRepository, ProfileRepository, RepoResult, UserRepository};
pub use value_objects::{DocId, Role};
