//! Configuration module for the penrose command-line tool
//!
//! Provides types, discovery and parsing for `penrose.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
