//! Configuration loading
//!
//! Loads [`Config`](sse_auth_domain::Config) from `.env`, config files and
//! `SSE_AUTH_*` environment variables.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, load_layered, probe_config_paths};
