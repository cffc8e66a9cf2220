//! Configuration structures
//!
//! Loaded by `sse-auth-infra`'s config loader from environment variables or
//! a TOML/JSON file. Every section has defaults so a file only needs the
//! providers it uses.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_HTTP_BACKOFF_MS, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_POPUP_HEIGHT, DEFAULT_POPUP_TIMEOUT_SECS,
    DEFAULT_POPUP_WIDTH, DEFAULT_USER_AGENT, DEFAULT_WINDOW_NAME,
};
use crate::types::{LoginOptions, ProviderKind};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Redirect URI applied to every provider that does not set its own.
    pub redirect_uri: Option<String>,
    pub popup: PopupSettings,
    pub http: HttpSettings,
    pub providers: BTreeMap<ProviderKind, LoginOptions>,
}

impl Config {
    /// Options for `provider`, with the global redirect URI filled in.
    #[must_use]
    pub fn login_options(&self, provider: ProviderKind) -> LoginOptions {
        let mut options = self.providers.get(&provider).cloned().unwrap_or_default();
        if options.redirect_uri.is_none() {
            options.redirect_uri.clone_from(&self.redirect_uri);
        }
        options
    }
}

/// Popup window geometry and polling
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PopupSettings {
    pub window_name: String,
    pub width: u32,
    pub height: u32,
    pub poll_interval_ms: u64,
    /// Zero disables the timeout.
    pub timeout_secs: u64,
}

impl PopupSettings {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

impl Default for PopupSettings {
    fn default() -> Self {
        Self {
            window_name: DEFAULT_WINDOW_NAME.to_string(),
            width: DEFAULT_POPUP_WIDTH,
            height: DEFAULT_POPUP_HEIGHT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_secs: DEFAULT_POPUP_TIMEOUT_SECS,
        }
    }
}

/// Outbound HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    /// Total attempts, initial try included.
    pub max_attempts: usize,
    pub backoff_ms: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            backoff_ms: DEFAULT_HTTP_BACKOFF_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
