//! Headless login button

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sse_auth_domain::{LoginOptions, LoginSuccess, ProviderKind, Result, SseAuthError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::render::{button_label, render_button, ButtonStyle, ButtonVariant};
use crate::login::LoginFlow;

type SuccessCallback = Box<dyn Fn(LoginSuccess) + Send + Sync>;
type FailureCallback = Box<dyn Fn(SseAuthError) + Send + Sync>;

/// Clears the loading flag however the click ends.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A provider login button: one login at a time, results routed to callbacks.
pub struct LoginButton {
    provider: ProviderKind,
    options: LoginOptions,
    flow: Arc<LoginFlow>,
    style: ButtonStyle,
    loading: AtomicBool,
    on_success: Option<SuccessCallback>,
    on_failure: Option<FailureCallback>,
}

impl fmt::Debug for LoginButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginButton")
            .field("provider", &self.provider)
            .field("style", &self.style)
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

impl LoginButton {
    pub fn new(provider: ProviderKind, options: LoginOptions, flow: Arc<LoginFlow>) -> Self {
        Self {
            provider,
            options,
            flow,
            style: ButtonStyle::default(),
            loading: AtomicBool::new(false),
            on_success: None,
            on_failure: None,
        }
    }

    /// Icon button with the provider's bundled icon.
    pub fn icon(provider: ProviderKind, options: LoginOptions, flow: Arc<LoginFlow>) -> Self {
        Self::new(provider, options, flow)
            .with_style(ButtonStyle { variant: ButtonVariant::Icon, ..ButtonStyle::default() })
    }

    #[must_use]
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn on_success(mut self, callback: impl Fn(LoginSuccess) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_failure(mut self, callback: impl Fn(SseAuthError) + Send + Sync + 'static) -> Self {
        self.on_failure = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn provider(&self) -> ProviderKind {
        self.provider
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn label(&self) -> String {
        button_label(self.provider, self.style.variant, self.is_loading())
    }

    /// Current markup, reflecting the loading state.
    #[must_use]
    pub fn render(&self) -> String {
        render_button(self.provider, &self.style, self.is_loading())
    }

    /// Run the login and route the outcome to the callbacks.
    ///
    /// # Errors
    /// Returns [`SseAuthError::LoginInProgress`] if a login started by an
    /// earlier click is still running. Login failures go to `on_failure`.
    pub async fn click(&self) -> Result<()> {
        self.click_with_cancel(CancellationToken::new()).await
    }

    /// Like [`click`](Self::click), abandoning the popup when `cancel` fires.
    ///
    /// # Errors
    /// Returns [`SseAuthError::LoginInProgress`] while another click is running.
    pub async fn click_with_cancel(&self, cancel: CancellationToken) -> Result<()> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(provider = %self.provider, "Ignoring click while login is in progress");
            return Err(SseAuthError::LoginInProgress);
        }
        let _guard = LoadingGuard(&self.loading);

        let outcome = match self.flow.prepare(self.provider, &self.options) {
            Ok(request) => self.flow.run(&request, cancel).await.into_result(),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(success) => {
                info!(provider = %self.provider, "Login button succeeded");
                if let Some(callback) = &self.on_success {
                    callback(success);
                }
            }
            Err(err) => {
                debug!(provider = %self.provider, error = %err, "Login button failed");
                if let Some(callback) = &self.on_failure {
                    callback(err);
                }
            }
        }
        Ok(())
    }
}
