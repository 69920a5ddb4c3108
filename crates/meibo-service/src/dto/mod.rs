//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry `validator` derives; response DTOs serialize with the
//! camelCase wire names the stored documents use.

pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest};
pub use responses::{
    AuthResponse, EventUpsertResponse, ImportResponse, ProfileUpsertResponse, ReplaceResponse,
    UserResponse,
};
