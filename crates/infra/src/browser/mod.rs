//! Browser environments for native processes

pub mod loopback;

pub use loopback::{Launcher, LoopbackBrowser, LoopbackPopup};
