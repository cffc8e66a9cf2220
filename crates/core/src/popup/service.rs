//! Popup redirect capture
//!
//! Opens a centred popup and polls it until it lands on the redirect URI,
//! the user closes it, the timeout elapses, or the caller cancels.

use std::time::Duration;

use sse_auth_common::url::{to_query, QueryMap};
use sse_auth_domain::{
    PopupSettings, Result, SseAuthError, DEFAULT_POLL_INTERVAL_MS, DEFAULT_POPUP_HEIGHT,
    DEFAULT_POPUP_TIMEOUT_SECS, DEFAULT_POPUP_WIDTH, DEFAULT_WINDOW_NAME,
};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::ports::{BrowserEnvironment, PopupHandle, ScreenGeometry};

/// Window and polling parameters for one popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOptions {
    pub window_name: String,
    pub width: u32,
    pub height: u32,
    /// Prefix the popup location must contain; defaults to the opener origin.
    pub redirect_uri: Option<String>,
    pub poll_interval: Duration,
    /// `None` polls until the popup closes or the caller cancels.
    pub timeout: Option<Duration>,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            window_name: DEFAULT_WINDOW_NAME.to_string(),
            width: DEFAULT_POPUP_WIDTH,
            height: DEFAULT_POPUP_HEIGHT,
            redirect_uri: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            timeout: Some(Duration::from_secs(DEFAULT_POPUP_TIMEOUT_SECS)),
        }
    }
}

impl From<&PopupSettings> for PopupOptions {
    fn from(settings: &PopupSettings) -> Self {
        Self {
            window_name: settings.window_name.clone(),
            width: settings.width,
            height: settings.height,
            redirect_uri: None,
            poll_interval: settings.poll_interval(),
            timeout: settings.timeout(),
        }
    }
}

impl PopupOptions {
    #[must_use]
    pub fn with_window_name(mut self, name: impl Into<String>) -> Self {
        self.window_name = name.into();
        self
    }

    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Feature string for a `width` x `height` window centred on the opener.
///
/// Horizontal offset is half the spare width; vertical offset divides the
/// spare height by 2.5 so the window sits slightly above centre.
#[must_use]
pub fn popup_features(geometry: ScreenGeometry, width: u32, height: u32) -> String {
    let left =
        f64::from(geometry.screen_x) + (f64::from(geometry.outer_width) - f64::from(width)) / 2.0;
    let top =
        f64::from(geometry.screen_y) + (f64::from(geometry.outer_height) - f64::from(height)) / 2.5;
    format!(
        "width={width},height={height},left={},top={}",
        format_coordinate(left),
        format_coordinate(top)
    )
}

/// Whole numbers print without a fractional part.
fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// One popup login attempt.
#[derive(Debug, Clone)]
pub struct PopupWindow {
    url: String,
    options: PopupOptions,
    cancel: CancellationToken,
}

impl PopupWindow {
    pub fn new(url: impl Into<String>, options: PopupOptions) -> Self {
        Self { url: url.into(), options, cancel: CancellationToken::new() }
    }

    /// Stop polling (and close the popup) when `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn options(&self) -> &PopupOptions {
        &self.options
    }

    /// Open the popup and wait for the redirect.
    ///
    /// Resolves with the redirect's query parameters, after closing the popup.
    ///
    /// # Errors
    /// - [`SseAuthError::PopupBlocked`] if the window could not be opened
    /// - [`SseAuthError::PopupClosed`] if the user closed it first
    /// - [`SseAuthError::PopupTimeout`] once the timeout elapses
    /// - [`SseAuthError::Cancelled`] when the cancellation token fires
    pub async fn open(&self, browser: &dyn BrowserEnvironment) -> Result<QueryMap> {
        let features = popup_features(browser.geometry(), self.options.width, self.options.height);
        let redirect_prefix =
            self.options.redirect_uri.clone().unwrap_or_else(|| browser.origin());

        debug!(window = %self.options.window_name, %features, "Opening login popup");
        let Some(popup) = browser.open(&self.url, &self.options.window_name, &features) else {
            warn!(window = %self.options.window_name, "Popup window was blocked");
            return Err(SseAuthError::PopupBlocked);
        };

        let result = self.poll(popup.as_ref(), &redirect_prefix).await;
        if result.is_err() {
            popup.close();
        }
        result
    }

    async fn poll(&self, popup: &dyn PopupHandle, redirect_prefix: &str) -> Result<QueryMap> {
        let period = self.options.poll_interval;
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let deadline = self.options.timeout.map(|timeout| Instant::now() + timeout);
        let expired = async {
            match deadline {
                Some(deadline) => time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(expired);

        loop {
            tokio::select! {
                () = self.cancel.cancelled() => {
                    info!(window = %self.options.window_name, "Popup login cancelled");
                    return Err(SseAuthError::Cancelled);
                }
                () = &mut expired => {
                    let secs = self.options.timeout.map_or(0, |t| t.as_secs());
                    warn!(window = %self.options.window_name, timeout_secs = secs, "Popup login timed out");
                    return Err(SseAuthError::PopupTimeout(secs));
                }
                _ = ticker.tick() => {
                    if let Some(params) = check_popup(popup, redirect_prefix)? {
                        popup.close();
                        return Ok(params);
                    }
                }
            }
        }
    }
}

/// One poll: `Ok(Some)` on redirect, `Ok(None)` to keep polling.
fn check_popup(popup: &dyn PopupHandle, redirect_prefix: &str) -> Result<Option<QueryMap>> {
    if popup.is_closed() {
        info!("Popup window closed before redirect");
        return Err(SseAuthError::PopupClosed);
    }

    match popup.location() {
        Ok(Some(location)) if location.as_str().contains(redirect_prefix) => {
            debug!(path = location.path(), "Popup reached redirect URI");
            Ok(Some(to_query(location.query().unwrap_or_default())))
        }
        Ok(_) => Ok(None),
        Err(err) => {
            trace!(error = %err, "Ignoring popup location error");
            Ok(None)
        }
    }
}
