//! Login options and results

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::SseAuthError;

/// Credential material (client secrets, API keys).
///
/// `Debug` never prints the value and the buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value for the one request that needs it.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Caller-supplied configuration for one provider login.
///
/// Provider-specific fields are ignored by providers that do not use them.
/// Empty strings count as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginOptions {
    pub client_id: Option<String>,
    pub client_secret: Option<Secret>,
    /// Requested scopes; the provider default applies when empty.
    pub scope: Vec<String>,
    /// Adds the provider's email scope (X: fetches the email separately).
    pub email_required: bool,
    /// Discord only; adds `identify`. Defaults to true when unset.
    pub profile_required: Option<bool>,
    /// Defaults to the browser environment's origin.
    pub redirect_uri: Option<String>,
    /// Extra authorization query parameters, applied last.
    pub authorization_params: BTreeMap<String, String>,

    pub authorization_url: Option<String>,
    pub token_url: Option<String>,
    pub user_url: Option<String>,

    // Auth0 / XSUAA
    pub domain: Option<String>,
    pub audience: Option<String>,
    pub max_age: Option<u64>,
    pub connection: Option<String>,
    // Microsoft
    pub tenant: Option<String>,
    // Keycloak
    pub server_url: Option<String>,
    pub realm: Option<String>,
    // Cognito / Battle.net
    pub region: Option<String>,
    pub user_pool_id: Option<String>,
    // PayPal
    pub sandbox: bool,
    // Facebook
    pub fields: Vec<String>,
    // Steam
    pub api_key: Option<Secret>,
}

impl LoginOptions {
    /// Options carrying the usual client credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<Secret>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    #[must_use]
    pub fn with_authorization_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.authorization_params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn with_email_required(mut self, required: bool) -> Self {
        self.email_required = required;
        self
    }

    /// Client id, treating blank values as missing.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        non_empty(self.client_id.as_deref())
    }

    /// Client secret, treating blank values as missing.
    #[must_use]
    pub fn client_secret(&self) -> Option<&Secret> {
        self.client_secret.as_ref().filter(|secret| !secret.is_empty())
    }

    /// Overlay `other` on top of `self`: every field set in `other` wins.
    #[must_use]
    pub fn merged_with(mut self, other: Self) -> Self {
        overlay(&mut self.client_id, other.client_id);
        overlay(&mut self.client_secret, other.client_secret);
        overlay(&mut self.profile_required, other.profile_required);
        overlay(&mut self.redirect_uri, other.redirect_uri);
        overlay(&mut self.authorization_url, other.authorization_url);
        overlay(&mut self.token_url, other.token_url);
        overlay(&mut self.user_url, other.user_url);
        overlay(&mut self.domain, other.domain);
        overlay(&mut self.audience, other.audience);
        overlay(&mut self.max_age, other.max_age);
        overlay(&mut self.connection, other.connection);
        overlay(&mut self.tenant, other.tenant);
        overlay(&mut self.server_url, other.server_url);
        overlay(&mut self.realm, other.realm);
        overlay(&mut self.region, other.region);
        overlay(&mut self.user_pool_id, other.user_pool_id);
        overlay(&mut self.api_key, other.api_key);
        if !other.scope.is_empty() {
            self.scope = other.scope;
        }
        if !other.fields.is_empty() {
            self.fields = other.fields;
        }
        self.email_required |= other.email_required;
        self.sandbox |= other.sandbox;
        self.authorization_params.extend(other.authorization_params);
        self
    }
}

fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

/// Returns `Some` only for values with non-whitespace content.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Uniform result of a provider login.
///
/// `error` set means the login failed; `access_token` and `user_data` may
/// still carry partial results (X returns both when the email lookup fails).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginResponse {
    pub error: Option<SseAuthError>,
    pub access_token: Option<String>,
    pub user_data: Option<Value>,
}

impl LoginResponse {
    #[must_use]
    pub const fn success(access_token: Option<String>, user_data: Value) -> Self {
        Self { error: None, access_token, user_data: Some(user_data) }
    }

    #[must_use]
    pub const fn failure(error: SseAuthError) -> Self {
        Self { error: Some(error), access_token: None, user_data: None }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none() && self.user_data.is_some()
    }

    /// Split into the success payload or the error.
    ///
    /// # Errors
    /// Returns the recorded error, or `Internal` when neither an error nor
    /// user data is present.
    pub fn into_result(self) -> Result<LoginSuccess, SseAuthError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        match self.user_data {
            Some(user_data) => Ok(LoginSuccess { access_token: self.access_token, user_data }),
            None => Err(SseAuthError::Internal("login finished without user data".into())),
        }
    }
}

/// Payload handed to a button's success callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginSuccess {
    /// Absent for Steam, which authenticates through OpenID 2.0.
    pub access_token: Option<String>,
    pub user_data: Value,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn secret_debug_is_redacted() {
        let options = LoginOptions::new("client", "super-secret");
        let debug = format!("{options:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("Secret(***)"));
    }

    #[test]
    fn blank_credentials_count_as_missing() {
        let options = LoginOptions::new("  ", "");
        assert!(options.client_id().is_none());
        assert!(options.client_secret().is_none());
    }

    #[test]
    fn deserializes_from_toml() {
        let options: LoginOptions = toml::from_str(
            r#"
            client_id = "abc"
            client_secret = "shh"
            scope = ["read:user"]
            email_required = true

            [authorization_params]
            allow_signup = "true"
            "#,
        )
        .unwrap();

        assert_eq!(options.client_id(), Some("abc"));
        assert_eq!(options.client_secret().map(Secret::expose), Some("shh"));
        assert_eq!(options.scope, vec!["read:user"]);
        assert!(options.email_required);
        assert_eq!(options.authorization_params["allow_signup"], "true");
    }

    #[test]
    fn merged_with_prefers_override_values() {
        let base = LoginOptions::new("base-id", "base-secret").with_scope(["a"]);
        let overlay = LoginOptions {
            client_id: Some("override-id".into()),
            redirect_uri: Some("http://localhost:3000".into()),
            ..LoginOptions::default()
        };

        let merged = base.merged_with(overlay);
        assert_eq!(merged.client_id(), Some("override-id"));
        assert_eq!(merged.client_secret().map(Secret::expose), Some("base-secret"));
        assert_eq!(merged.scope, vec!["a"]);
        assert_eq!(merged.redirect_uri.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn into_result_prefers_error() {
        let response = LoginResponse {
            error: Some(SseAuthError::provider("no email")),
            access_token: Some("token".into()),
            user_data: Some(json!({"id": 1})),
        };
        assert!(!response.is_success());
        assert_eq!(response.into_result().unwrap_err(), SseAuthError::provider("no email"));

        let ok = LoginResponse::success(Some("token".into()), json!({"id": 1}));
        let success = ok.into_result().unwrap();
        assert_eq!(success.access_token.as_deref(), Some("token"));
    }
}
