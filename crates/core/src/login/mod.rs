//! Provider login flow
//!
//! Popup, code exchange, profile fetch. Steam takes the OpenID 2.0 branch.

pub mod exchange;
pub mod profile;
pub mod service;
pub mod steam;

pub use exchange::{parse_token_response, token_request, TokenResponse};
pub use profile::{extract_profile, profile_request};
pub use service::LoginFlow;
