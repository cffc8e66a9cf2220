//! Test doubles for the core ports

pub mod mocks;

pub use mocks::{MockBrowser, MockPopup, MockTransport, OpenedPopup, PopupStep};
