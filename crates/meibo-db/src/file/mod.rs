//! Flat-file storage backend
//!
//! One JSON file per collection under a data directory. Files are read and
//! written whole; a per-collection async mutex serializes read-modify-write
//! cycles within the process.

mod repositories;
mod store;

pub use repositories::{FileEventRepository, FileProfileRepository, FileUserRepository};
pub use store::FileStore;
