//! Authorization-code exchange

use serde_json::{json, Map, Value};
use sse_auth_common::encoding::basic_credentials;
use sse_auth_common::url::{append_query, build_query, strip_query, to_query};
use sse_auth_domain::{ProviderKind, Result, SseAuthError};

use crate::http::{HttpRequest, HttpResponse};
use crate::providers::{AuthorizationRequest, ProviderDescriptor, TokenRequestStyle};

/// Parsed token endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    /// The full response, for provider-specific fields.
    pub raw: Value,
}

/// Token request for `code`, encoded the way the provider expects.
///
/// The redirect URI is sent without the query string the provider appended.
#[must_use]
pub fn token_request(request: &AuthorizationRequest, code: &str) -> HttpRequest {
    let redirect_uri = strip_query(&request.redirect_uri);
    let client_id = request.client_id();
    let client_secret = request.client_secret();
    let url = &request.endpoints.token;

    match request.descriptor.token_request {
        TokenRequestStyle::Json => {
            let mut http = HttpRequest::post(url)
                .header("Content-Type", "application/json")
                .json(json!({
                    "grant_type": "authorization_code",
                    "client_id": client_id,
                    "client_secret": client_secret,
                    "code": code,
                    "redirect_uri": redirect_uri,
                }));
            if request.kind() == ProviderKind::Github {
                http = http.header("Accept", "application/json");
            }
            http
        }
        TokenRequestStyle::Form => HttpRequest::post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .form([
                ("grant_type", "authorization_code"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("redirect_uri", redirect_uri),
                ("code", code),
            ]),
        TokenRequestStyle::FormBasic => {
            let mut form = vec![
                ("grant_type", "authorization_code".to_string()),
                ("code", code.to_string()),
                ("redirect_uri", redirect_uri.to_string()),
            ];
            if request.kind() == ProviderKind::BattleNet {
                form.push(("scope", request.scope.join(" ")));
            }
            if let Some(verifier) = &request.code_verifier {
                form.push(("code_verifier", verifier.clone()));
            }
            HttpRequest::post(url)
                .header("Authorization", basic_credentials(client_id, client_secret))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .header("Accept", "application/json")
                .form(form)
        }
        TokenRequestStyle::Query => {
            let query = build_query([
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("redirect_uri", redirect_uri),
                ("code", code),
            ]);
            HttpRequest::get(append_query(url, &query)).header("Accept", "application/json")
        }
    }
}

/// Parse a token response, accepting JSON or a form-encoded body.
///
/// # Errors
/// Returns [`SseAuthError::Provider`] when the response carries an `error`
/// or no access token, using the provider's description when it sent one.
pub fn parse_token_response(
    descriptor: &ProviderDescriptor,
    response: &HttpResponse,
) -> Result<TokenResponse> {
    let raw = response.json().unwrap_or_else(|_| form_to_json(&response.body));

    if raw.get("error").is_some_and(is_truthy) {
        let description = raw
            .get("error_description")
            .and_then(Value::as_str)
            .or_else(|| raw.pointer("/error/data/error_description").and_then(Value::as_str))
            .filter(|d| !d.is_empty())
            .unwrap_or(descriptor.token_error_fallback);
        return Err(SseAuthError::provider(description));
    }

    let access_token = raw
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SseAuthError::provider(descriptor.token_error_fallback))?
        .to_string();
    let token_type = raw.get("token_type").and_then(Value::as_str).map(str::to_string);

    Ok(TokenResponse { access_token, token_type, raw })
}

fn form_to_json(body: &str) -> Value {
    let map: Map<String, Value> =
        to_query(body.trim()).into_iter().map(|(k, v)| (k, Value::String(v))).collect();
    Value::Object(map)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
