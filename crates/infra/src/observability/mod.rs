//! Logging setup
//!
//! Installs a `tracing` subscriber filtered by `RUST_LOG`. Output goes to
//! stderr so command output on stdout stays machine readable.

use sse_auth_domain::{Result, SseAuthError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Filter used when `RUST_LOG` is unset or invalid.
#[must_use]
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info,sse_auth_core=debug,sse_auth_infra=debug")
    } else {
        EnvFilter::new("warn,sse_auth_core=info,sse_auth_infra=info")
    }
}

/// Initialize the global subscriber.
///
/// # Errors
/// Returns [`SseAuthError::Internal`] if a global subscriber is already set.
pub fn init_tracing(format: LogFormat, verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| SseAuthError::Internal(format!("failed to initialize tracing: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let _ = init_tracing(LogFormat::Json, false);
        let second = init_tracing(LogFormat::Pretty, false);
        assert!(matches!(second, Err(SseAuthError::Internal(_))));
    }

    #[test]
    fn verbose_filter_enables_debug() {
        assert!(default_filter(true).to_string().contains("sse_auth_core=debug"));
        assert!(default_filter(false).to_string().contains("warn"));
    }
}
