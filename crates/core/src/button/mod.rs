//! Login buttons: click handling and markup

pub mod render;
pub mod service;

pub use render::{button_label, provider_icon, render_button, ButtonStyle, ButtonVariant};
pub use service::LoginButton;
