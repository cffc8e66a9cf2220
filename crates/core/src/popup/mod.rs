//! Popup window controller and the browser port it runs against

pub mod ports;
pub mod service;

pub use ports::{BrowserEnvironment, LocationError, PopupHandle, ScreenGeometry};
pub use service::{popup_features, PopupOptions, PopupWindow};
