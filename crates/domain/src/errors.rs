//! Error types used throughout SSE Auth

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::POPUP_CLOSED_MESSAGE;

/// Main error type for SSE Auth
///
/// `Config` is the only variant returned synchronously, before a popup is
/// opened. Every other variant is folded into
/// [`LoginResponse::error`](crate::LoginResponse) by the login flow.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SseAuthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A login is already in progress")]
    LoginInProgress,

    #[error("Popup window could not be opened")]
    PopupBlocked,

    #[error("{}", POPUP_CLOSED_MESSAGE)]
    PopupClosed,

    #[error("Popup window timed out after {0} seconds")]
    PopupTimeout(u64),

    #[error("Login cancelled")]
    Cancelled,

    #[error("{}", provider_message(.error, .description.as_deref()))]
    Provider { error: String, description: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn provider_message(error: &str, description: Option<&str>) -> String {
    match description {
        Some(desc) if !desc.is_empty() => format!("{error}: {desc}"),
        _ => error.to_string(),
    }
}

impl SseAuthError {
    /// Provider-side failure without a description.
    pub fn provider(error: impl Into<String>) -> Self {
        Self::Provider { error: error.into(), description: None }
    }

    /// Stable label suitable for structured logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::LoginInProgress => "login_in_progress",
            Self::PopupBlocked => "popup_blocked",
            Self::PopupClosed => "popup_closed",
            Self::PopupTimeout(_) => "popup_timeout",
            Self::Cancelled => "cancelled",
            Self::Provider { .. } => "provider",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for SSE Auth operations
pub type Result<T> = std::result::Result<T, SseAuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_closed_uses_user_facing_message() {
        assert_eq!(SseAuthError::PopupClosed.to_string(), "Popup window closed by user");
    }

    #[test]
    fn provider_error_display_includes_description() {
        let err = SseAuthError::Provider {
            error: "access_denied".to_string(),
            description: Some("The user denied the request".to_string()),
        };
        assert_eq!(err.to_string(), "access_denied: The user denied the request");
        assert_eq!(SseAuthError::provider("invalid_scope").to_string(), "invalid_scope");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(SseAuthError::Config("missing".into())).unwrap();
        assert_eq!(json["type"], "Config");
        assert_eq!(json["message"], "missing");
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(SseAuthError::Cancelled.label(), "cancelled");
        assert_eq!(SseAuthError::PopupTimeout(5).label(), "popup_timeout");
    }
}
