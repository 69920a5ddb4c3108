//! Value objects - small immutable domain types

mod doc_id;
mod role;

pub use doc_id::DocId;
pub use role::Role;
