//! Domain constants
//!
//! Defaults shared by the popup controller, the login flows, and the
//! configuration loader.

// Popup window defaults
pub const DEFAULT_WINDOW_NAME: &str = "SSE Login";
pub const DEFAULT_POPUP_WIDTH: u32 = 600;
pub const DEFAULT_POPUP_HEIGHT: u32 = 700;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_POPUP_TIMEOUT_SECS: u64 = 300;

// Error messages surfaced to callers
pub const POPUP_CLOSED_MESSAGE: &str = "Popup window closed by user";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Client Id and Client Secret is Required";
pub const TOKEN_ERROR_FALLBACK: &str = "Error retrieving access token";

// HTTP defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_HTTP_BACKOFF_MS: u64 = 200;
pub const DEFAULT_USER_AGENT: &str = "SSE Auth";

// Environment variable prefix for configuration
pub const ENV_PREFIX: &str = "SSE_AUTH";
