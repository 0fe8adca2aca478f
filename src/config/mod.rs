//! Configuration module for the sheet decoder
//!
//! Provides types, discovery and loading for `sheetanim.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
