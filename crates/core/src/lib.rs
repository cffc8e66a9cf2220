//! # SSE Auth Core
//!
//! Popup login flows with no platform dependencies.
//!
//! This crate contains:
//! - The popup controller and the browser port it polls
//! - The provider table and authorization request construction
//! - Token exchange and profile fetch over the HTTP port
//! - Headless login buttons
//!
//! ## Architecture Principles
//! - Only depends on `sse-auth-common` and `sse-auth-domain`
//! - No sockets, browsers or HTTP clients; those live in `sse-auth-infra`
//! - All external dependencies via traits

#![forbid(unsafe_code)]

pub mod button;
pub mod http;
pub mod login;
pub mod popup;
pub mod providers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use button::{ButtonStyle, ButtonVariant, LoginButton};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};
pub use login::LoginFlow;
pub use popup::{
    BrowserEnvironment, LocationError, PopupHandle, PopupOptions, PopupWindow, ScreenGeometry,
};
pub use providers::{descriptor, AuthorizationRequest, Endpoints, ProviderDescriptor};
