//! Domain types and models

pub mod login;
pub mod provider;

pub use login::{non_empty, LoginOptions, LoginResponse, LoginSuccess, Secret};
pub use provider::ProviderKind;
