//! # SSE Auth Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed [`HttpClient`] with retry and backoff
//! - The [`LoopbackBrowser`] that runs popup logins through the system
//!   browser and a local callback server
//! - Configuration loading from `.env`, files and environment variables
//! - Tracing initialisation
//!
//! ## Architecture
//! - Implements traits defined in `sse-auth-core`
//! - Contains all "impure" code (sockets, processes, files)

pub mod browser;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use browser::{LoopbackBrowser, LoopbackPopup};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, LogFormat};
