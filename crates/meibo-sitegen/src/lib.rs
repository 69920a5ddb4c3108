//! Static profile site generation
//!
//! Reads a profile list JSON file and emits `index.html` plus one page per
//! profile. Output is deterministic: the same input produces byte-identical
//! files.

pub mod generate;

pub use generate::{generate, GenerateError};
