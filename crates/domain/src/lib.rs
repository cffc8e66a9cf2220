//! # SSE Auth Domain
//!
//! Domain types shared by every SSE Auth crate.
//!
//! This crate contains:
//! - The error taxonomy and `Result` alias
//! - Provider identifiers and per-login options
//! - The uniform login response
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other SSE Auth crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use constants::*;
pub use errors::*;
pub use types::*;
