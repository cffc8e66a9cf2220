//! Provider table and authorization request construction
//!
//! - **[`descriptor`]**: per-provider constants
//! - **[`endpoints`]**: authorization, token and profile URLs
//! - **[`scope`]**: effective scope computation
//! - **[`authorize`]**: validated authorization requests

pub mod authorize;
pub mod descriptor;
pub mod endpoints;
pub mod scope;

pub use authorize::AuthorizationRequest;
pub use descriptor::{
    descriptor, ProfileAuth, ProfileExtract, Protocol, ProviderDescriptor, TokenRequestStyle,
};
pub use endpoints::{resolve, Endpoints};
pub use scope::effective_scope;
