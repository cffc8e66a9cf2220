//! Steam OpenID 2.0 verification

use sse_auth_common::url::{append_query, build_query, QueryMap};
use sse_auth_domain::{Result, SseAuthError};

use crate::http::{HttpRequest, HttpResponse};
use crate::providers::AuthorizationRequest;

const STEAM_LOGIN_FAILED: &str = "Steam login failed: Unknown error";

/// Replay the assertion with `openid.mode=check_authentication`.
#[must_use]
pub fn verification_request(request: &AuthorizationRequest, params: &QueryMap) -> HttpRequest {
    let pairs = params.iter().map(|(key, value)| {
        let value = if key == "openid.mode" { "check_authentication" } else { value.as_str() };
        (key.as_str(), value)
    });
    HttpRequest::get(append_query(&request.endpoints.token, &build_query(pairs)))
}

/// # Errors
/// Returns [`SseAuthError::Provider`] unless Steam answered `is_valid:true`.
pub fn check_verification(response: &HttpResponse) -> Result<()> {
    if response.is_success() && response.body.contains("is_valid:true") {
        Ok(())
    } else {
        Err(SseAuthError::provider(STEAM_LOGIN_FAILED))
    }
}

/// Steam id: the last path segment of `openid.claimed_id`.
///
/// # Errors
/// Returns [`SseAuthError::Provider`] when the claimed id is missing.
pub fn steam_id(params: &QueryMap) -> Result<String> {
    params
        .get("openid.claimed_id")
        .and_then(|claimed| claimed.trim_end_matches('/').rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| SseAuthError::provider(STEAM_LOGIN_FAILED))
}

/// `GetPlayerSummaries` lookup for one player.
#[must_use]
pub fn player_request(request: &AuthorizationRequest, steam_id: &str) -> HttpRequest {
    let key = request.options.api_key.as_ref().map(|key| key.expose()).unwrap_or_default();
    let query = build_query([("key", key), ("steamids", steam_id)]);
    HttpRequest::get(append_query(&request.endpoints.profile, &query))
        .header("Accept", "application/json")
}

#[cfg(test)]
mod tests {
    use sse_auth_common::url::to_query;
    use sse_auth_domain::{LoginOptions, ProviderKind};

    use super::*;

    fn steam_request() -> AuthorizationRequest {
        let options = LoginOptions { api_key: Some("steam-key".into()), ..LoginOptions::default() };
        AuthorizationRequest::build(ProviderKind::Steam, &options, "http://localhost:3000").unwrap()
    }

    fn assertion() -> QueryMap {
        to_query(
            "openid.mode=id_res&openid.claimed_id=https%3A%2F%2Fsteamcommunity.com%2Fopenid%2Fid%2F76561197960287930&openid.sig=abc",
        )
    }

    #[test]
    fn verification_switches_mode() {
        let http = verification_request(&steam_request(), &assertion());
        assert!(http.url.starts_with("https://steamcommunity.com/openid/login?"));
        assert!(http.url.contains("openid.mode=check_authentication"));
        assert!(http.url.contains("openid.sig=abc"));
        assert!(!http.url.contains("id_res"));
    }

    #[test]
    fn verification_requires_is_valid() {
        assert!(check_verification(&HttpResponse::new(200, "ns:http://specs.openid.net/auth/2.0\nis_valid:true\n")).is_ok());
        assert_eq!(
            check_verification(&HttpResponse::new(200, "is_valid:false\n")).unwrap_err(),
            SseAuthError::provider("Steam login failed: Unknown error")
        );
    }

    #[test]
    fn extracts_steam_id() {
        assert_eq!(steam_id(&assertion()).unwrap(), "76561197960287930");
        assert!(steam_id(&QueryMap::new()).is_err());
    }

    #[test]
    fn player_request_carries_key() {
        let http = player_request(&steam_request(), "765");
        assert_eq!(
            http.url,
            "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/?key=steam-key&steamids=765"
        );
    }
}
