//! Business logic services
//!
//! Service layer implementations handling validation and orchestration of
//! domain operations over the repository ports.

pub mod auth;
pub mod context;
pub mod error;
pub mod events;
pub mod import;
pub mod profiles;
pub mod users;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use events::EventService;
pub use import::ImportService;
pub use profiles::ProfileService;
pub use users::UserService;
