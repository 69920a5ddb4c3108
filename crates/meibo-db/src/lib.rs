//! # meibo-db
//!
//! Storage layer implementing the repository traits from `meibo-core`.
//!
//! ## Overview
//!
//! Two interchangeable backends live here, selected at startup by
//! `STORAGE_MODE`:
//!
//! - **PostgreSQL** via SQLx: connection pool management, `FromRow` models,
//!   model ↔ entity mappers and repository implementations.
//! - **Flat JSON files**: one file per collection under a data directory
//!   (`profiles.json`, `events.json`, `users.json`), read whole and written
//!   whole, for deployments without a database.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meibo_db::pool::{create_pool, DatabaseConfig};
//! use meibo_db::repositories::PgProfileRepository;
//! use meibo_core::traits::ProfileRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let profiles = PgProfileRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod file;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use file::{FileEventRepository, FileProfileRepository, FileStore, FileUserRepository};
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgEventRepository, PgProfileRepository, PgUserRepository};
