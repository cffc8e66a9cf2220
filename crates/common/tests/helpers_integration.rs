//! Integration tests for the URL, encoding and markup helpers
//!
//! Exercises the helpers the way the login flow uses them: decoding the
//! redirect a popup lands on, building authorization URLs, and producing
//! Basic credentials for token exchange.

use sse_auth_common::encoding::{basic_credentials, decode_base64, encode_base64};
use sse_auth_common::html::{clsx, escape_html, ClassValue};
use sse_auth_common::random::generate_random_string;
use sse_auth_common::url::{
    append_query, build_query, parse_path, parse_url, strip_query, to_query,
};

/// Validates that a provider redirect can be decoded into the flat map the
/// login flow reads `code`, `state` and `error` from.
///
/// # Test Steps
/// 1. Parse a redirect URL carrying an error response
/// 2. Decode its search component
/// 3. Verify both keys are present and unescaped
#[test]
fn test_redirect_query_decoding() {
    let redirect =
        "http://localhost:3000/?error=access_denied&error_description=The+user+said+no%21";
    let parsed = parse_url(redirect, None);
    let query = to_query(&parsed.search);

    assert_eq!(query["error"], "access_denied");
    assert_eq!(query["error_description"], "The user said no!");
}

/// Validates that an authorization URL built from ordered pairs decodes back
/// to the same parameters.
#[test]
fn test_authorization_url_round_trip() {
    let state = generate_random_string(16);
    let query = build_query([
        ("response_type", "code"),
        ("client_id", "abc"),
        ("redirect_uri", "http://localhost:3000/callback"),
        ("scope", "openid profile"),
        ("state", state.as_str()),
    ]);
    let url = append_query("https://accounts.spotify.com/authorize", &query);

    let parsed = parse_url(&url, None);
    assert_eq!(parsed.host.as_deref(), Some("accounts.spotify.com"));
    assert_eq!(parsed.pathname, "/authorize");

    let decoded = to_query(&parsed.search);
    assert_eq!(decoded["redirect_uri"], "http://localhost:3000/callback");
    assert_eq!(decoded["scope"], "openid profile");
    assert_eq!(decoded["state"], state);
}

/// Validates the documented path split.
#[test]
fn test_parse_path_components() {
    let parsed = parse_path("/a?b=1#c");
    assert_eq!(parsed.pathname, "/a");
    assert_eq!(parsed.search, "?b=1");
    assert_eq!(parsed.hash, "#c");
}

/// Validates that the redirect URI sent on token exchange drops the query the
/// provider appended.
#[test]
fn test_exchange_redirect_uri_has_no_query() {
    assert_eq!(
        strip_query("http://localhost:3000/callback?code=abc&state=1"),
        "http://localhost:3000/callback"
    );
}

/// Validates the Basic credential header used by Spotify, PayPal, Battle.net
/// and X.
#[test]
fn test_basic_credentials_round_trip() -> anyhow::Result<()> {
    let header = basic_credentials("id", "secret");
    let encoded = header.strip_prefix("Basic ").unwrap_or_default();
    assert_eq!(encoded, encode_base64("id:secret"));
    assert_eq!(decode_base64(encoded)?, "id:secret");
    Ok(())
}

/// Validates button class composition with optional caller classes.
#[test]
fn test_button_classes() {
    let variant: Option<&str> = Some("dark");
    let classes = clsx([
        ClassValue::from("sse-auth__call-controls__button"),
        ClassValue::from(None::<String>),
        ClassValue::map([
            (format!("sse-auth__call-controls__button--variant-{}", variant.unwrap_or_default()), variant.is_some()),
            ("sse-auth__call-controls__button--enabled".to_string(), false),
        ]),
    ]);
    assert_eq!(
        classes,
        "sse-auth__call-controls__button sse-auth__call-controls__button--variant-dark"
    );
    assert_eq!(escape_html(&classes), classes);
}
