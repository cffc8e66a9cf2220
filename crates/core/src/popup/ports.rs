//! Port interfaces for the browser hosting the login popup
//!
//! These traits stand in for the page's `window` object so the popup
//! controller can run against a real browser bridge, a loopback callback
//! server, or a scripted mock.

use std::sync::Arc;

use thiserror::Error;
use url::Url;

/// Position and outer size of the opener window, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenGeometry {
    pub screen_x: i32,
    pub screen_y: i32,
    pub outer_width: u32,
    pub outer_height: u32,
}

/// Why a popup's location could not be read on this poll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Still on the provider's origin.
    #[error("popup location is cross-origin")]
    CrossOrigin,

    #[error("popup location unavailable: {0}")]
    Unavailable(String),
}

/// A window opened by [`BrowserEnvironment::open`].
pub trait PopupHandle: Send + Sync {
    /// Whether the window has been closed, by the user or by [`close`](Self::close).
    fn is_closed(&self) -> bool;

    /// Current location, `None` before the first navigation completes.
    ///
    /// # Errors
    /// Returns [`LocationError::CrossOrigin`] while the popup shows a page
    /// from another origin.
    fn location(&self) -> Result<Option<Url>, LocationError>;

    /// Close the window. Idempotent.
    fn close(&self);
}

impl<T: PopupHandle + ?Sized> PopupHandle for Arc<T> {
    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn location(&self) -> Result<Option<Url>, LocationError> {
        (**self).location()
    }

    fn close(&self) {
        (**self).close();
    }
}

/// The page (or process) that opens login popups.
pub trait BrowserEnvironment: Send + Sync {
    /// Origin of the opener, e.g. `http://localhost:3000`. Used as the default
    /// redirect URI.
    fn origin(&self) -> String;

    /// Opener geometry used to centre the popup.
    fn geometry(&self) -> ScreenGeometry;

    /// Open `url` in a named window with a `window.open` feature string.
    ///
    /// Returns `None` when the window could not be opened (blocked).
    fn open(&self, url: &str, name: &str, features: &str) -> Option<Box<dyn PopupHandle>>;
}
