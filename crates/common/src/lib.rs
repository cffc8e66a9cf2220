//! Pure helpers shared across SSE Auth crates.
//!
//! Nothing in this crate performs I/O.
//!
//! # Modules
//!
//! - [`url`]: lenient URL parse/stringify and query-string helpers
//! - [`encoding`]: base64 and HTTP Basic credentials
//! - [`random`]: state, verifier and nonce generation
//! - [`html`]: `clsx`, HTML escaping and provider icons

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod encoding;
pub mod error;
pub mod html;
pub mod random;
pub mod url;

pub use error::{CommonError, CommonResult};
