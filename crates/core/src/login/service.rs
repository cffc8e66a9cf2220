//! Login flow service - drives one provider login end to end

use std::sync::Arc;

use serde_json::Value;
use sse_auth_common::url::{strip_query, QueryMap};
use sse_auth_domain::{LoginOptions, LoginResponse, ProviderKind, Result, SseAuthError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::exchange::{parse_token_response, token_request, TokenResponse};
use super::profile::{extract_profile, profile_request, x_email, x_email_request};
use super::steam;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::popup::{BrowserEnvironment, PopupOptions, PopupWindow};
use crate::providers::{AuthorizationRequest, Protocol};

/// Popup login flow shared by every provider.
pub struct LoginFlow {
    browser: Arc<dyn BrowserEnvironment>,
    transport: Arc<dyn HttpTransport>,
    popup: PopupOptions,
}

impl LoginFlow {
    pub fn new(browser: Arc<dyn BrowserEnvironment>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { browser, transport, popup: PopupOptions::default() }
    }

    /// Window size, poll interval and timeout for every popup this flow opens.
    #[must_use]
    pub fn with_popup_options(mut self, popup: PopupOptions) -> Self {
        self.popup = popup;
        self
    }

    #[must_use]
    pub const fn popup_options(&self) -> &PopupOptions {
        &self.popup
    }

    /// Validate `options` and build the authorization request.
    ///
    /// # Errors
    /// Returns [`SseAuthError::Config`] when required settings are missing.
    pub fn prepare(&self, kind: ProviderKind, options: &LoginOptions) -> Result<AuthorizationRequest> {
        AuthorizationRequest::build(kind, options, &self.browser.origin())
    }

    /// Prepare and run a login.
    ///
    /// # Errors
    /// Only configuration errors are returned; everything after the popup
    /// opens is reported through [`LoginResponse::error`].
    pub async fn login(&self, kind: ProviderKind, options: &LoginOptions) -> Result<LoginResponse> {
        self.login_with_cancel(kind, options, CancellationToken::new()).await
    }

    /// Like [`login`](Self::login), stopping early when `cancel` fires.
    ///
    /// # Errors
    /// Returns [`SseAuthError::Config`] when required settings are missing.
    pub async fn login_with_cancel(
        &self,
        kind: ProviderKind,
        options: &LoginOptions,
        cancel: CancellationToken,
    ) -> Result<LoginResponse> {
        let request = self.prepare(kind, options)?;
        Ok(self.run(&request, cancel).await)
    }

    /// Open the popup for a prepared request and finish the login.
    pub async fn run(&self, request: &AuthorizationRequest, cancel: CancellationToken) -> LoginResponse {
        let provider = request.kind();
        info!(%provider, "Starting popup login");

        match self.authenticate(request, cancel).await {
            Ok(response) => {
                match &response.error {
                    Some(err) => warn!(%provider, error = %err, "Login finished with partial result"),
                    None => info!(%provider, "Login succeeded"),
                }
                response
            }
            Err(err) => {
                warn!(%provider, error = %err, kind = err.label(), "Login failed");
                LoginResponse::failure(err)
            }
        }
    }

    async fn authenticate(
        &self,
        request: &AuthorizationRequest,
        cancel: CancellationToken,
    ) -> Result<LoginResponse> {
        let popup_options = self
            .popup
            .clone()
            .with_window_name(request.kind().window_name())
            .with_redirect_uri(strip_query(&request.redirect_uri));
        let params = PopupWindow::new(&request.url, popup_options)
            .with_cancellation(cancel)
            .open(self.browser.as_ref())
            .await?;

        if let Some(error) = params.get("error") {
            return Err(SseAuthError::Provider {
                error: error.clone(),
                description: params.get("error_description").cloned(),
            });
        }

        match request.descriptor.protocol {
            Protocol::OAuth2 => self.complete_oauth2(request, &params).await,
            Protocol::OpenId2 => self.complete_steam(request, &params).await,
        }
    }

    async fn complete_oauth2(
        &self,
        request: &AuthorizationRequest,
        params: &QueryMap,
    ) -> Result<LoginResponse> {
        let code = params
            .get("code")
            .filter(|code| !code.is_empty())
            .ok_or_else(|| SseAuthError::provider("Authorization code missing from redirect"))?;

        debug!(provider = %request.kind(), "Exchanging authorization code");
        let response = self.send(token_request(request, code)).await?;
        let token = parse_token_response(request.descriptor, &response)?;

        let response = self.send(profile_request(request, &token)).await?;
        let user = extract_profile(request.descriptor.profile_extract, &response)?;

        if request.kind() == ProviderKind::X && request.options.email_required {
            return Ok(self.attach_x_email(token, user).await);
        }
        Ok(LoginResponse::success(Some(token.access_token), user))
    }

    /// Failures keep the token and profile alongside the error.
    async fn attach_x_email(&self, token: TokenResponse, mut user: Value) -> LoginResponse {
        let email = match self.send(x_email_request(&token)).await {
            Ok(response) => x_email(&response),
            Err(err) => Err(err),
        };
        match email {
            Ok(email) => {
                if let Some(data) = user.get_mut("data").and_then(Value::as_object_mut) {
                    data.insert("email".to_string(), Value::String(email));
                } else if let Some(object) = user.as_object_mut() {
                    object.insert("email".to_string(), Value::String(email));
                }
                LoginResponse::success(Some(token.access_token), user)
            }
            Err(err) => LoginResponse {
                error: Some(err),
                access_token: Some(token.access_token),
                user_data: Some(user),
            },
        }
    }

    async fn complete_steam(
        &self,
        request: &AuthorizationRequest,
        params: &QueryMap,
    ) -> Result<LoginResponse> {
        let response = self.send(steam::verification_request(request, params)).await?;
        steam::check_verification(&response)?;
        let steam_id = steam::steam_id(params)?;

        debug!(%steam_id, "Steam assertion verified");
        let response = self.send(steam::player_request(request, &steam_id)).await?;
        let player = extract_profile(request.descriptor.profile_extract, &response)?;
        Ok(LoginResponse::success(None, player))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %strip_query(&request.url), "Sending provider request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "Provider responded");
        Ok(response)
    }
}
