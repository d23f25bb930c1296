//! Core types and trait definitions for Reach.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod analysis;
pub mod error;
pub mod prompt;
pub mod store;

pub use error::{Error, Result};
