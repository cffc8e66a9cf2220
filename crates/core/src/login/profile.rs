//! User profile requests

use serde_json::Value;
use sse_auth_common::url::{append_query, build_query};
use sse_auth_domain::{ProviderKind, Result, SseAuthError, DEFAULT_USER_AGENT};

use super::exchange::TokenResponse;
use crate::http::{HttpRequest, HttpResponse};
use crate::providers::{AuthorizationRequest, ProfileAuth, ProfileExtract};

const X_USER_FIELDS: &str = "description,id,name,profile_image_url,username,verified,verified_type";
const X_VERIFY_CREDENTIALS_URL: &str =
    "https://api.x.com/1.1/account/verify_credentials.json?include_email=true&skip_status=true";

/// Profile request carrying the access token the provider's way.
#[must_use]
pub fn profile_request(request: &AuthorizationRequest, token: &TokenResponse) -> HttpRequest {
    let descriptor = request.descriptor;
    let mut query: Vec<(&str, String)> = Vec::new();

    match request.kind() {
        ProviderKind::X => query.push(("user.fields", X_USER_FIELDS.to_string())),
        ProviderKind::Paypal => query.push(("schema", "openid".to_string())),
        ProviderKind::Facebook => {
            let fields = if request.options.fields.is_empty() {
                "id,name".to_string()
            } else {
                request.options.fields.join(",")
            };
            query.push(("fields", fields));
        }
        _ => {}
    }
    if descriptor.profile_auth == ProfileAuth::QueryParam {
        query.push(("access_token", token.access_token.clone()));
    }

    let url = append_query(&request.endpoints.profile, &build_query(query));
    let mut http = HttpRequest::get(url).header("Accept", "application/json");

    let authorization = match descriptor.profile_auth {
        ProfileAuth::Bearer => Some(format!("Bearer {}", token.access_token)),
        ProfileAuth::TokenType => Some(format!(
            "{} {}",
            token.token_type.as_deref().filter(|t| !t.is_empty()).unwrap_or("Bearer"),
            token.access_token
        )),
        ProfileAuth::OAuth => Some(format!("OAuth {}", token.access_token)),
        ProfileAuth::QueryParam => None,
    };
    if let Some(authorization) = authorization {
        http = http.header("Authorization", authorization);
    }

    match request.kind() {
        ProviderKind::Discord | ProviderKind::Linkedin | ProviderKind::Microsoft => {
            http = http.header("User-Agent", DEFAULT_USER_AGENT);
        }
        ProviderKind::BattleNet => {
            http = http.header("User-Agent", format!("Battledotnet-OAuth-{}", request.client_id()));
        }
        ProviderKind::Twitch => {
            http = http.header("Client-ID", request.client_id());
        }
        _ => {}
    }
    http
}

/// Pull the user object out of a profile response.
///
/// # Errors
/// - [`SseAuthError::Provider`] for a non-2xx status or a missing user entry
/// - [`SseAuthError::Parse`] when the body is not JSON
pub fn extract_profile(extract: ProfileExtract, response: &HttpResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(SseAuthError::Provider {
            error: "Unable to fetch user profile".to_string(),
            description: Some(format!("HTTP {}", response.status)),
        });
    }
    let body = response.json()?;
    let user = match extract {
        ProfileExtract::Whole => Some(body),
        ProfileExtract::FirstOfData => body.pointer("/data/0").cloned(),
        ProfileExtract::FirstPlayer => body.pointer("/response/players/0").cloned(),
    };
    user.ok_or_else(|| SseAuthError::provider("No user data returned"))
}

/// X account lookup that includes the email address.
#[must_use]
pub fn x_email_request(token: &TokenResponse) -> HttpRequest {
    HttpRequest::get(X_VERIFY_CREDENTIALS_URL)
        .header("Authorization", format!("Bearer {}", token.access_token))
        .header("Accept", "application/json")
}

/// Email from a `verify_credentials` response.
///
/// # Errors
/// Returns [`SseAuthError::Provider`] when the request failed or the account
/// has no email.
pub fn x_email(response: &HttpResponse) -> Result<String> {
    if !response.is_success() {
        return Err(SseAuthError::provider("Unable to fetch Email"));
    }
    response
        .json()
        .ok()
        .and_then(|body| body.get("email").and_then(Value::as_str).map(str::to_string))
        .filter(|email| !email.is_empty())
        .ok_or_else(|| SseAuthError::provider("X login failed: no user email found"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sse_auth_domain::LoginOptions;

    use super::*;

    fn token(token_type: Option<&str>) -> TokenResponse {
        TokenResponse {
            access_token: "tok".into(),
            token_type: token_type.map(str::to_string),
            raw: json!({}),
        }
    }

    fn request_for(kind: ProviderKind, options: LoginOptions) -> AuthorizationRequest {
        AuthorizationRequest::build(kind, &options, "http://localhost:3000").unwrap()
    }

    #[test]
    fn bearer_by_default() {
        let request = request_for(ProviderKind::Github, LoginOptions::new("id", "secret"));
        let http = profile_request(&request, &token(None));
        assert_eq!(http.url, "https://api.github.com/user");
        assert_eq!(http.header_value("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn token_type_scheme_with_fallback() {
        let options = LoginOptions { tenant: Some("common".into()), ..LoginOptions::new("id", "s") };
        let request = request_for(ProviderKind::Microsoft, options);
        let http = profile_request(&request, &token(Some("Bearer")));
        assert_eq!(http.header_value("Authorization"), Some("Bearer tok"));
        assert_eq!(http.header_value("User-Agent"), Some("SSE Auth"));

        let options = LoginOptions { domain: Some("sap.test".into()), ..LoginOptions::new("id", "s") };
        let request = request_for(ProviderKind::Xsuaa, options);
        assert_eq!(
            profile_request(&request, &token(None)).header_value("Authorization"),
            Some("Bearer tok")
        );
    }

    #[test]
    fn yandex_uses_oauth_scheme() {
        let request = request_for(ProviderKind::Yandex, LoginOptions::new("id", "secret"));
        assert_eq!(
            profile_request(&request, &token(None)).header_value("Authorization"),
            Some("OAuth tok")
        );
    }

    #[test]
    fn provider_specific_headers() {
        let twitch = request_for(ProviderKind::Twitch, LoginOptions::new("twitch-id", "secret"));
        assert_eq!(profile_request(&twitch, &token(None)).header_value("Client-ID"), Some("twitch-id"));

        let bnet = request_for(ProviderKind::BattleNet, LoginOptions::new("bnet", "secret"));
        assert_eq!(
            profile_request(&bnet, &token(None)).header_value("User-Agent"),
            Some("Battledotnet-OAuth-bnet")
        );
    }

    #[test]
    fn query_additions() {
        let x = request_for(ProviderKind::X, LoginOptions::new("id", "secret"));
        assert_eq!(
            profile_request(&x, &token(None)).url,
            "https://api.x.com/2/users/me?user.fields=description%2Cid%2Cname%2Cprofile_image_url%2Cusername%2Cverified%2Cverified_type"
        );

        let paypal = request_for(ProviderKind::Paypal, LoginOptions::new("id", "secret"));
        assert!(profile_request(&paypal, &token(None)).url.ends_with("/userinfo?schema=openid"));

        let options = LoginOptions { fields: vec!["id".into(), "email".into()], ..LoginOptions::new("id", "s") };
        let facebook = request_for(ProviderKind::Facebook, options);
        let http = profile_request(&facebook, &token(None));
        assert_eq!(http.url, "https://graph.facebook.com/v19.0/me?fields=id%2Cemail&access_token=tok");
        assert_eq!(http.header_value("Authorization"), None);
    }

    #[test]
    fn extracts_nested_users() {
        let twitch = HttpResponse::ok_json(&json!({"data": [{"id": "1", "login": "streamer"}]}));
        assert_eq!(extract_profile(ProfileExtract::FirstOfData, &twitch).unwrap()["login"], "streamer");

        let steam = HttpResponse::ok_json(&json!({"response": {"players": [{"steamid": "765"}]}}));
        assert_eq!(extract_profile(ProfileExtract::FirstPlayer, &steam).unwrap()["steamid"], "765");

        let empty = HttpResponse::ok_json(&json!({"data": []}));
        assert_eq!(
            extract_profile(ProfileExtract::FirstOfData, &empty).unwrap_err(),
            SseAuthError::provider("No user data returned")
        );
    }

    #[test]
    fn non_success_profile_is_an_error() {
        let response = HttpResponse::new(401, r#"{"message":"Bad credentials"}"#);
        assert!(matches!(
            extract_profile(ProfileExtract::Whole, &response),
            Err(SseAuthError::Provider { .. })
        ));
    }

    #[test]
    fn x_email_outcomes() {
        assert_eq!(x_email(&HttpResponse::ok_json(&json!({"email": "a@x.com"}))).unwrap(), "a@x.com");
        assert_eq!(
            x_email(&HttpResponse::new(403, "{}")).unwrap_err(),
            SseAuthError::provider("Unable to fetch Email")
        );
        assert_eq!(
            x_email(&HttpResponse::ok_json(&json!({"id": 1}))).unwrap_err(),
            SseAuthError::provider("X login failed: no user email found")
        );
    }
}
