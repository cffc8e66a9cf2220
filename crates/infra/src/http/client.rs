use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use sse_auth_core::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};
use sse_auth_domain::{HttpSettings, SseAuthError};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with built-in retry and timeout support.
///
/// Backs the [`HttpTransport`] port used for token exchange and profile
/// requests.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, SseAuthError> {
        Self::builder().build()
    }

    /// Client configured from the `[http]` section of the configuration.
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, SseAuthError> {
        Self::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .max_attempts(settings.max_attempts)
            .base_backoff(Duration::from_millis(settings.backoff_ms))
            .user_agent(settings.user_agent.clone())
            .build()
    }

    /// Execute the provided request builder with retry semantics.
    ///
    /// Server errors are retried until attempts run out; the last response is
    /// returned whatever its status. Only `GET` requests are retried: a token
    /// exchange carries a single-use authorization code and is sent once.
    pub async fn send(&self, builder: RequestBuilder) -> Result<HttpResponse, SseAuthError> {
        let mut attempts = self.max_attempts.max(1);

        for attempt in 0..attempts {
            let cloned_builder = builder.try_clone().ok_or_else(|| {
                SseAuthError::Internal("request body cannot be cloned for retries".into())
            })?;

            let request = cloned_builder.build().map_err(InfraError::from)?;

            let method = request.method().clone();
            if method != Method::GET {
                attempts = 1;
            }
            let url = request.url().clone();
            debug!(attempt = attempt + 1, %method, url = %url.path(), "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt = attempt + 1, %method, %status, "received HTTP response");

                    if status.is_server_error() && attempt + 1 < attempts {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    let body = response.text().await.map_err(InfraError::from)?;
                    return Ok(HttpResponse::new(status.as_u16(), body));
                }
                Err(err) => {
                    debug!(attempt = attempt + 1, %method, error = %err, "HTTP request failed");

                    if attempt + 1 < attempts && should_retry_error(&err) {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    return Err(InfraError::from(err).into());
                }
            }
        }

        Err(SseAuthError::Internal("http client exhausted retries without producing a result".into()))
    }

    fn to_builder(&self, request: HttpRequest) -> RequestBuilder {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(pairs) => builder.form(&pairs),
        }
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = u32::try_from(retry_number.saturating_sub(1).min(8)).unwrap_or(8);
        self.base_backoff.saturating_mul(1u32 << shift)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn execute(&self, request: HttpRequest) -> sse_auth_domain::Result<HttpResponse> {
        let builder = self.to_builder(request);
        self.send(builder).await
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        let settings = HttpSettings::default();
        Self {
            timeout: Duration::from_secs(settings.timeout_secs),
            max_attempts: settings.max_attempts,
            base_backoff: Duration::from_millis(settings.backoff_ms),
            user_agent: None,
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    #[must_use]
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    #[must_use]
    pub const fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, SseAuthError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(InfraError::from)?;

        Ok(HttpClient { client, max_attempts: self.max_attempts.max(1), base_backoff: self.base_backoff })
    }
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_request() || err.is_connect()
}
