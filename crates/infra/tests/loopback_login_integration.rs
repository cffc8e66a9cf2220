//! Integration tests for native logins
//!
//! Runs the full popup flow through the loopback browser and the reqwest
//! client, with provider endpoints served by wiremock. The "system browser"
//! is a launcher that requests the callback URL directly.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use sse_auth_core::{BrowserEnvironment, LoginFlow, PopupOptions};
use sse_auth_domain::{LoginOptions, ProviderKind, SseAuthError};
use sse_auth_infra::{HttpClient, LoopbackBrowser};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Launcher standing in for the system browser: hits `callback` once.
fn visit(callback: String) -> impl Fn(&str) -> io::Result<()> + Send + Sync {
    move |_authorize_url| {
        let callback = callback.clone();
        tokio::spawn(async move {
            let client = reqwest::Client::builder().no_proxy().build().expect("client");
            let _ = client.get(callback).send().await;
        });
        Ok(())
    }
}

async fn ephemeral_browser() -> LoopbackBrowser {
    LoopbackBrowser::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await.expect("bind")
}

fn fast_popup() -> PopupOptions {
    PopupOptions::default()
        .with_poll_interval(Duration::from_millis(25))
        .with_timeout(Some(Duration::from_secs(10)))
}

fn client() -> Arc<HttpClient> {
    Arc::new(
        HttpClient::builder()
            .max_attempts(2)
            .base_backoff(Duration::from_millis(5))
            .build()
            .expect("http client"),
    )
}

/// Validates a GitHub login end to end over real sockets.
///
/// # Test Steps
/// 1. Serve token and profile endpoints from wiremock
/// 2. Launch a "browser" that requests the loopback callback with a code
/// 3. Run the login flow
/// 4. Verify the token exchange carried the code and the profile call the token
#[tokio::test]
async fn test_github_login_over_loopback() -> anyhow::Result<()> {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .and(body_partial_json(json!({"code": "abc", "client_id": "gh-id"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "gho_123"})))
        .expect(1)
        .mount(&provider)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", "Bearer gho_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "octocat", "id": 1})))
        .expect(1)
        .mount(&provider)
        .await;

    let browser = ephemeral_browser().await;
    let origin = browser.origin();
    let browser = browser.with_launcher(visit(format!("{origin}/?code=abc")));
    let flow = LoginFlow::new(Arc::new(browser), client()).with_popup_options(fast_popup());

    let options = LoginOptions {
        token_url: Some(format!("{}/login/oauth/access_token", provider.uri())),
        user_url: Some(format!("{}/user", provider.uri())),
        ..LoginOptions::new("gh-id", "gh-secret")
    };

    let success = flow.login(ProviderKind::Github, &options).await?.into_result()?;

    assert_eq!(success.access_token.as_deref(), Some("gho_123"));
    assert_eq!(success.user_data["login"], "octocat");
    Ok(())
}

/// Validates a provider error on the callback skips the token exchange.
///
/// # Test Steps
/// 1. Launch a "browser" that returns `error=access_denied`
/// 2. Run the login flow
/// 3. Verify the provider error and that wiremock saw no requests
#[tokio::test]
async fn test_denied_consent_reports_provider_error() -> anyhow::Result<()> {
    let provider = MockServer::start().await;

    let browser = ephemeral_browser().await;
    let origin = browser.origin();
    let browser = browser
        .with_launcher(visit(format!("{origin}/?error=access_denied&error_description=User+denied")));
    let flow = LoginFlow::new(Arc::new(browser), client()).with_popup_options(fast_popup());

    let options = LoginOptions {
        token_url: Some(format!("{}/token", provider.uri())),
        ..LoginOptions::new("id", "secret")
    };
    let response = flow.login(ProviderKind::Google, &options).await?;

    assert_eq!(
        response.error,
        Some(SseAuthError::Provider {
            error: "access_denied".into(),
            description: Some("User denied".into()),
        })
    );
    assert!(provider.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}

/// Validates a token endpoint outage does not replay the authorization code.
///
/// # Test Steps
/// 1. Serve 503 from the token endpoint
/// 2. Run the login flow with two attempts per request
/// 3. Verify exactly one token request and a failed response
#[tokio::test]
async fn test_token_endpoint_outage_sends_code_once() -> anyhow::Result<()> {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&provider)
        .await;

    let browser = ephemeral_browser().await;
    let origin = browser.origin();
    let browser = browser.with_launcher(visit(format!("{origin}/?code=abc")));
    let flow = LoginFlow::new(Arc::new(browser), client()).with_popup_options(fast_popup());

    let options = LoginOptions {
        token_url: Some(format!("{}/token", provider.uri())),
        ..LoginOptions::new("id", "secret")
    };
    let response = flow.login(ProviderKind::Spotify, &options).await?;

    assert!(!response.is_success());
    assert!(response.access_token.is_none());
    assert!(response.error.is_some());
    Ok(())
}

/// Validates cancelling a login that never receives a callback.
///
/// # Test Steps
/// 1. Launch a "browser" that never calls back
/// 2. Cancel after a short delay
/// 3. Verify the flow reports `Cancelled`
#[tokio::test]
async fn test_cancel_without_callback() -> anyhow::Result<()> {
    let browser = ephemeral_browser().await.with_launcher(|_| Ok(()));
    let flow = LoginFlow::new(Arc::new(browser), client()).with_popup_options(fast_popup());

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let response =
        flow.login_with_cancel(ProviderKind::Discord, &LoginOptions::new("id", "secret"), cancel).await?;
    assert_eq!(response.error, Some(SseAuthError::Cancelled));
    Ok(())
}
