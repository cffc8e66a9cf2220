//! Authorization request construction
//!
//! Validates configuration and builds the URL the popup opens. Everything
//! here is synchronous so configuration errors surface before any window or
//! network activity.

use sse_auth_common::random::{generate_random_string, generate_random_uuid};
use sse_auth_common::url::{append_query, build_query};
use sse_auth_domain::{non_empty, LoginOptions, ProviderKind, Result, SseAuthError};

use super::descriptor::{descriptor, Protocol, ProviderDescriptor};
use super::endpoints::{resolve, Endpoints};
use super::scope::effective_scope;

const OPENID2_NS: &str = "http://specs.openid.net/auth/2.0";
const OPENID2_IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";

/// A validated login, ready to open in a popup.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub descriptor: &'static ProviderDescriptor,
    pub options: LoginOptions,
    pub endpoints: Endpoints,
    pub scope: Vec<String>,
    /// Where the provider sends the user back; query string included as given.
    pub redirect_uri: String,
    /// `state` sent on the authorization URL, if any.
    pub state: Option<String>,
    /// PKCE verifier sent on token exchange (X, `plain` method).
    pub code_verifier: Option<String>,
    /// Authorization URL parameters, in order.
    pub params: Vec<(String, String)>,
    pub url: String,
}

impl AuthorizationRequest {
    /// Validate `options` for `kind` and build the authorization URL.
    ///
    /// `origin` is the redirect URI used when the options set none.
    ///
    /// # Errors
    /// Returns [`SseAuthError::Config`] when credentials or provider-specific
    /// settings are missing.
    pub fn build(kind: ProviderKind, options: &LoginOptions, origin: &str) -> Result<Self> {
        let descriptor = descriptor(kind);
        validate_credentials(descriptor, options)?;
        let endpoints = resolve(kind, options)?;

        let redirect_uri = non_empty(options.redirect_uri.as_deref()).unwrap_or(origin).to_string();
        let scope = effective_scope(descriptor, options);

        let mut params = match descriptor.protocol {
            Protocol::OpenId2 => openid2_params(&redirect_uri),
            Protocol::OAuth2 => oauth2_params(kind, options, &redirect_uri, &scope),
        };
        for (key, value) in &options.authorization_params {
            set_param(&mut params, key, value);
        }

        let state = find_param(&params, "state");
        let code_verifier =
            if kind == ProviderKind::X { find_param(&params, "code_challenge") } else { None };
        let url = append_query(&endpoints.authorization, &build_query(params.iter().map(|(k, v)| (k, v))));

        Ok(Self {
            descriptor,
            options: options.clone(),
            endpoints,
            scope,
            redirect_uri,
            state,
            code_verifier,
            params,
            url,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ProviderKind {
        self.descriptor.kind
    }

    /// Client id; empty only for Steam, which has none.
    #[must_use]
    pub fn client_id(&self) -> &str {
        self.options.client_id().unwrap_or_default()
    }

    #[must_use]
    pub fn client_secret(&self) -> &str {
        self.options.client_secret().map(|s| s.expose()).unwrap_or_default()
    }
}

fn validate_credentials(descriptor: &ProviderDescriptor, options: &LoginOptions) -> Result<()> {
    let present = match descriptor.protocol {
        Protocol::OpenId2 => options.api_key.as_ref().is_some_and(|key| !key.is_empty()),
        Protocol::OAuth2 => options.client_id().is_some() && options.client_secret().is_some(),
    };
    if present {
        Ok(())
    } else {
        Err(SseAuthError::Config(descriptor.config_message.to_string()))
    }
}

fn openid2_params(redirect_uri: &str) -> Vec<(String, String)> {
    [
        ("openid.ns", OPENID2_NS),
        ("openid.mode", "checkid_setup"),
        ("openid.return_to", redirect_uri),
        ("openid.identity", OPENID2_IDENTIFIER_SELECT),
        ("openid.claimed_id", OPENID2_IDENTIFIER_SELECT),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn oauth2_params(
    kind: ProviderKind,
    options: &LoginOptions,
    redirect_uri: &str,
    scope: &[String],
) -> Vec<(String, String)> {
    let mut params = vec![
        ("response_type".to_string(), "code".to_string()),
        ("client_id".to_string(), options.client_id().unwrap_or_default().to_string()),
        ("redirect_uri".to_string(), redirect_uri.to_string()),
        ("scope".to_string(), scope.join(" ")),
    ];
    let mut push = |key: &str, value: String| params.push((key.to_string(), value));

    match kind {
        ProviderKind::Auth0 => {
            if let Some(audience) = non_empty(options.audience.as_deref()) {
                push("audience", audience.to_string());
            }
            if let Some(max_age) = options.max_age {
                push("max_age", max_age.to_string());
            }
            if let Some(connection) = non_empty(options.connection.as_deref()) {
                push("connection", connection.to_string());
            }
        }
        ProviderKind::BattleNet => push("state", generate_random_uuid()),
        ProviderKind::Spotify => {
            push("state", generate_random_string(16));
            push("show_dialog", "false".to_string());
        }
        ProviderKind::X => {
            push("state", generate_random_uuid());
            push("code_challenge", generate_random_uuid());
            push("code_challenge_method", "plain".to_string());
        }
        ProviderKind::Paypal => push("flowEntry", "static".to_string()),
        _ => {}
    }
    params
}

/// Replace `key` in place, or append it.
fn set_param(params: &mut Vec<(String, String)>, key: &str, value: &str) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = value.to_string(),
        None => params.push((key.to_string(), value.to_string())),
    }
}

fn find_param(params: &[(String, String)], key: &str) -> Option<String> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}
