//! Subcommand implementations
//!
//! Each command returns the text to print so `main` owns all output.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::json;
use sse_auth_core::providers::{descriptor, resolve, Protocol};
use sse_auth_core::button::render_button;
use sse_auth_core::{AuthorizationRequest, ButtonStyle, ButtonVariant, LoginFlow, PopupOptions};
use sse_auth_domain::{Config, LoginOptions, LoginResponse, ProviderKind};
use sse_auth_infra::{HttpClient, LoopbackBrowser};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Redirect URI used by `authorize-url` and `login` when neither the config
/// nor the flags set one.
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8765";

/// One line per provider: id, name, protocol, configured flag and
/// authorization endpoint.
pub fn providers(config: &Config) -> String {
    let mut out = String::new();
    for kind in ProviderKind::ALL {
        let options = config.login_options(kind);
        let protocol = match descriptor(kind).protocol {
            Protocol::OAuth2 => "oauth2",
            Protocol::OpenId2 => "openid2",
        };
        let configured = if config.providers.contains_key(&kind) { "configured" } else { "-" };
        let endpoint = resolve(kind, &options).map_or_else(|_| "-".to_string(), |e| e.authorization);
        let _ = writeln!(
            out,
            "{:<10} {:<11} {:<8} {:<10} {endpoint}",
            kind.as_str(),
            kind.display_name(),
            protocol,
            configured
        );
    }
    out
}

/// Authorization URL the popup would open.
pub fn authorize_url(config: &Config, kind: ProviderKind, redirect_uri: Option<&str>) -> Result<String> {
    let mut options = config.login_options(kind);
    if let Some(uri) = redirect_uri {
        options.redirect_uri = Some(uri.to_string());
    }
    let request = AuthorizationRequest::build(kind, &options, redirect_uri_for(&options))
        .with_context(|| format!("cannot build {} authorization URL", kind.display_name()))?;
    Ok(request.url)
}

/// Run a login through the system browser and a loopback callback server.
///
/// Prints the login response as JSON; fails when the response carries an
/// error.
pub async fn login(
    config: &Config,
    kind: ProviderKind,
    timeout: Option<u64>,
    cancel: CancellationToken,
) -> Result<String> {
    let mut options = config.login_options(kind);
    options.redirect_uri = Some(redirect_uri_for(&options).to_string());
    let browser = LoopbackBrowser::for_redirect_uri(options.redirect_uri.as_deref())
        .await
        .context("cannot start loopback callback server")?;
    let transport = HttpClient::from_settings(&config.http).context("cannot build HTTP client")?;

    let mut popup = PopupOptions::from(&config.popup);
    if let Some(secs) = timeout {
        popup = popup.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }

    let flow = LoginFlow::new(Arc::new(browser), Arc::new(transport)).with_popup_options(popup);
    let request = flow.prepare(kind, &options)?;
    info!(provider = %kind, redirect_uri = %request.redirect_uri, "Opening browser for login");

    let response = flow.run(&request, cancel).await;
    let rendered = render_response(&response)?;
    if let Some(err) = response.error {
        bail!("{rendered}\n{} login failed: {err}", kind.display_name());
    }
    Ok(rendered)
}

/// Configured redirect URI, or [`DEFAULT_REDIRECT_URI`].
fn redirect_uri_for(options: &LoginOptions) -> &str {
    options.redirect_uri.as_deref().filter(|uri| !uri.is_empty()).unwrap_or(DEFAULT_REDIRECT_URI)
}

fn render_response(response: &LoginResponse) -> Result<String> {
    let value = json!({
        "access_token": response.access_token,
        "user_data": response.user_data,
        "error": response.error.as_ref().map(ToString::to_string),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Button markup for `kind`.
pub fn render(kind: ProviderKind, icon: bool, variant: Option<String>, class: Option<String>, loading: bool) -> String {
    let style = ButtonStyle {
        variant: if icon { ButtonVariant::Icon } else { ButtonVariant::Text },
        class_name: class,
        color_variant: variant,
        icon: None,
    };
    render_button(kind, &style, loading)
}

#[cfg(test)]
mod tests {
    use sse_auth_domain::SseAuthError;

    use super::*;

    fn config_with(kind: ProviderKind, options: LoginOptions) -> Config {
        let mut config = Config::default();
        config.providers.insert(kind, options);
        config
    }

    #[test]
    fn providers_lists_every_provider() {
        let config = config_with(ProviderKind::Github, LoginOptions::new("id", "secret"));
        let listing = providers(&config);

        assert_eq!(listing.lines().count(), ProviderKind::ALL.len());
        let github = listing.lines().find(|line| line.starts_with("github")).unwrap();
        assert!(github.contains("configured"));
        assert!(github.contains("https://github.com/login/oauth/authorize"));
        let steam = listing.lines().find(|line| line.starts_with("steam")).unwrap();
        assert!(steam.contains("openid2"));
    }

    #[test]
    fn authorize_url_uses_default_redirect() {
        let config = config_with(ProviderKind::Google, LoginOptions::new("gid", "secret"));
        let url = authorize_url(&config, ProviderKind::Google, None).unwrap();

        assert!(url.contains("client_id=gid"));
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8765"));
    }

    #[test]
    fn login_and_authorize_url_share_redirect() {
        let unset = LoginOptions::new("id", "secret");
        assert_eq!(redirect_uri_for(&unset), DEFAULT_REDIRECT_URI);

        let configured = LoginOptions {
            redirect_uri: Some("http://localhost:9000/cb".into()),
            ..LoginOptions::new("id", "secret")
        };
        assert_eq!(redirect_uri_for(&configured), "http://localhost:9000/cb");

        let config = config_with(ProviderKind::Github, configured);
        let url = authorize_url(&config, ProviderKind::Github, None).unwrap();
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A9000%2Fcb"));
    }

    #[test]
    fn authorize_url_requires_credentials() {
        let err = authorize_url(&Config::default(), ProviderKind::Github, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<SseAuthError>(), Some(SseAuthError::Config(_))));
    }

    #[test]
    fn render_switches_variant() {
        let text = render(ProviderKind::Github, false, None, None, false);
        assert_eq!(text, r#"<button type="button" class="sse-auth__text-button">Login with GitHub</button>"#);

        let icon = render(ProviderKind::Github, true, Some("dark".into()), Some("wide".into()), true);
        assert!(icon.contains("sse-auth__call-controls__button--variant-dark"));
        assert!(icon.contains("wide"));
        assert!(icon.contains(" disabled"));
    }

    #[test]
    fn render_response_includes_error_text() {
        let rendered = render_response(&LoginResponse::failure(SseAuthError::PopupClosed)).unwrap();
        assert!(rendered.contains("Popup window closed by user"));
        assert!(rendered.contains("\"access_token\": null"));
    }
}
