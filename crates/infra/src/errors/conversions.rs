//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use sse_auth_domain::SseAuthError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SseAuthError);

impl From<InfraError> for SseAuthError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SseAuthError> for InfraError {
    fn from(value: SseAuthError) -> Self {
        Self(value)
    }
}

trait IntoSseAuthError {
    fn into_sse_auth(self) -> SseAuthError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SseAuthError */
/* -------------------------------------------------------------------------- */

impl IntoSseAuthError for HttpError {
    fn into_sse_auth(self) -> SseAuthError {
        if self.is_timeout() {
            return SseAuthError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SseAuthError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return SseAuthError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return SseAuthError::Parse(format!("failed to read HTTP response: {self}"));
        }

        SseAuthError::Network(format!("HTTP error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_sse_auth())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → SseAuthError */
/* -------------------------------------------------------------------------- */

impl IntoSseAuthError for std::io::Error {
    fn into_sse_auth(self) -> SseAuthError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::AddrInUse => SseAuthError::Network(format!("callback port already in use: {self}")),
            ErrorKind::PermissionDenied => SseAuthError::Network(format!("permission denied: {self}")),
            ErrorKind::NotFound => SseAuthError::Config(format!("file not found: {self}")),
            _ => SseAuthError::Internal(format!("I/O error: {self}")),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        Self(value.into_sse_auth())
    }
}

/* -------------------------------------------------------------------------- */
/* parse errors → SseAuthError */
/* -------------------------------------------------------------------------- */

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        Self(SseAuthError::InvalidInput(format!("invalid URL: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        Self(SseAuthError::Config(format!("Invalid TOML format: {value}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(SseAuthError::Config(format!("Invalid JSON format: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind};

    use reqwest::Client;

    use super::*;

    #[test]
    fn io_addr_in_use_maps_to_network_error() {
        let mapped: SseAuthError = InfraError::from(IoError::new(ErrorKind::AddrInUse, "busy")).into();
        match mapped {
            SseAuthError::Network(msg) => assert!(msg.contains("port")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn url_parse_error_maps_to_invalid_input() {
        let err = url::Url::parse("not a url").unwrap_err();
        let mapped: SseAuthError = InfraError::from(err).into();
        assert!(matches!(mapped, SseAuthError::InvalidInput(_)));
    }

    #[test]
    fn toml_error_maps_to_config() {
        let err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let mapped: SseAuthError = InfraError::from(err).into();
        assert!(matches!(mapped, SseAuthError::Config(msg) if msg.starts_with("Invalid TOML")));
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: SseAuthError = InfraError::from(error).into();
        assert!(matches!(mapped, SseAuthError::Network(_)));
    }
}
