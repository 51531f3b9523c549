//! Vigil Core - Core abstractions for connection liveness testing
//!
//! This crate provides the fundamental traits and types that the other
//! Vigil crates depend on. It defines:
//!
//! - `Connection` - Trait for database connections
//! - Common types like `Value`, `Row`, `Column`, etc.
//! - `VigilError` and the crate-wide `Result` alias

mod connection;
mod error;
mod types;

pub use connection::*;
pub use error::*;
pub use types::*;
