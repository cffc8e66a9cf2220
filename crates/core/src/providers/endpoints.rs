//! Endpoint resolution
//!
//! Tenant-scoped providers (Auth0, Cognito, Keycloak, Microsoft, XSUAA)
//! derive their URLs from option fields; the rest have fixed defaults.
//! Explicit URL overrides in [`LoginOptions`] always win, and a tenant field
//! is only required when some endpoint is still built from it.

use sse_auth_domain::{non_empty, LoginOptions, ProviderKind, Result, SseAuthError};

use super::descriptor::descriptor;

/// The three URLs a login talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub authorization: String,
    /// Steam: the OpenID endpoint, reused for `check_authentication`.
    pub token: String,
    pub profile: String,
}

struct Defaults {
    authorization: String,
    token: String,
    profile: String,
}

fn fixed(authorization: &str, token: &str, profile: &str) -> Defaults {
    Defaults {
        authorization: authorization.to_string(),
        token: token.to_string(),
        profile: profile.to_string(),
    }
}

/// Resolve endpoints for `kind` from `options`.
///
/// # Errors
/// Returns [`SseAuthError::Config`] when a tenant field needed to build a
/// non-overridden URL is missing.
pub fn resolve(kind: ProviderKind, options: &LoginOptions) -> Result<Endpoints> {
    let overrides = [
        non_empty(options.authorization_url.as_deref()),
        non_empty(options.token_url.as_deref()),
        non_empty(options.user_url.as_deref()),
    ];

    let defaults = if overrides.iter().all(Option::is_some) {
        fixed("", "", "")
    } else {
        defaults(kind, options)?
    };

    let [authorization, token, profile] = overrides;
    Ok(Endpoints {
        authorization: authorization.map_or(defaults.authorization, str::to_string),
        token: token.map_or(defaults.token, str::to_string),
        profile: profile.map_or(defaults.profile, str::to_string),
    })
}

fn require<'a>(kind: ProviderKind, value: Option<&'a str>) -> Result<&'a str> {
    non_empty(value).ok_or_else(|| SseAuthError::Config(descriptor(kind).config_message.to_string()))
}

fn defaults(kind: ProviderKind, options: &LoginOptions) -> Result<Defaults> {
    let defaults = match kind {
        ProviderKind::Auth0 => {
            let domain = require(kind, options.domain.as_deref())?;
            Defaults {
                authorization: format!("https://{domain}/authorize"),
                token: format!("https://{domain}/oauth/token"),
                profile: format!("https://{domain}/userinfo"),
            }
        }
        ProviderKind::BattleNet => {
            let host = if options.region.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("CN")) {
                "oauth.battlenet.com.cn"
            } else {
                "oauth.battlenet.com"
            };
            Defaults {
                authorization: format!("https://{host}/authorize"),
                token: format!("https://{host}/token"),
                profile: "https://oauth.battle.net/userinfo".to_string(),
            }
        }
        ProviderKind::Cognito => {
            let pool = require(kind, options.user_pool_id.as_deref())?;
            let region = require(kind, options.region.as_deref())?;
            let base = format!("https://{pool}.auth.{region}.amazoncognito.com/oauth2");
            Defaults {
                authorization: format!("{base}/authorize"),
                token: format!("{base}/token"),
                profile: format!("{base}/userInfo"),
            }
        }
        ProviderKind::Discord => fixed(
            "https://discord.com/oauth2/authorize",
            "https://discord.com/api/oauth2/token",
            "https://discord.com/api/users/@me",
        ),
        ProviderKind::Facebook => fixed(
            "https://www.facebook.com/v19.0/dialog/oauth",
            "https://graph.facebook.com/v19.0/oauth/access_token",
            "https://graph.facebook.com/v19.0/me",
        ),
        ProviderKind::Github => fixed(
            "https://github.com/login/oauth/authorize",
            "https://github.com/login/oauth/access_token",
            "https://api.github.com/user",
        ),
        ProviderKind::Google => fixed(
            "https://accounts.google.com/o/oauth2/v2/auth",
            "https://oauth2.googleapis.com/token",
            "https://www.googleapis.com/oauth2/v3/userinfo",
        ),
        ProviderKind::Keycloak => {
            let server = require(kind, options.server_url.as_deref())?;
            let realm = require(kind, options.realm.as_deref())?;
            let base =
                format!("{}/realms/{realm}/protocol/openid-connect", server.trim_end_matches('/'));
            Defaults {
                authorization: format!("{base}/auth"),
                token: format!("{base}/token"),
                profile: format!("{base}/userinfo"),
            }
        }
        ProviderKind::Linkedin => fixed(
            "https://www.linkedin.com/oauth/v2/authorization",
            "https://www.linkedin.com/oauth/v2/accessToken",
            "https://api.linkedin.com/v2/userinfo",
        ),
        ProviderKind::Microsoft => {
            let tenant = require(kind, options.tenant.as_deref())?;
            let base = format!("https://login.microsoftonline.com/{tenant}/oauth2/v2.0");
            Defaults {
                authorization: format!("{base}/authorize"),
                token: format!("{base}/token"),
                profile: "https://graph.microsoft.com/v1.0/me".to_string(),
            }
        }
        ProviderKind::Paypal if options.sandbox => fixed(
            "https://www.sandbox.paypal.com/signin/authorize",
            "https://api-m.sandbox.paypal.com/v1/oauth2/token",
            "https://api-m.sandbox.paypal.com/v1/identity/openidconnect/userinfo",
        ),
        ProviderKind::Paypal => fixed(
            "https://www.paypal.com/signin/authorize",
            "https://api-m.paypal.com/v1/oauth2/token",
            "https://api-m.paypal.com/v1/identity/openidconnect/userinfo",
        ),
        ProviderKind::Spotify => fixed(
            "https://accounts.spotify.com/authorize",
            "https://accounts.spotify.com/api/token",
            "https://api.spotify.com/v1/me",
        ),
        ProviderKind::Steam => fixed(
            "https://steamcommunity.com/openid/login",
            "https://steamcommunity.com/openid/login",
            "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/",
        ),
        ProviderKind::Twitch => fixed(
            "https://id.twitch.tv/oauth2/authorize",
            "https://id.twitch.tv/oauth2/token",
            "https://api.twitch.tv/helix/users",
        ),
        ProviderKind::X => fixed(
            "https://x.com/i/oauth2/authorize",
            "https://api.x.com/2/oauth2/token",
            "https://api.x.com/2/users/me",
        ),
        ProviderKind::Xsuaa => {
            let domain = require(kind, options.domain.as_deref())?;
            Defaults {
                authorization: format!("https://{domain}/oauth/authorize"),
                token: format!("https://{domain}/oauth/token"),
                profile: format!("https://{domain}/userinfo"),
            }
        }
        ProviderKind::Yandex => fixed(
            "https://oauth.yandex.ru/authorize",
            "https://oauth.yandex.ru/token",
            "https://login.yandex.ru/info",
        ),
    };
    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_provider_defaults() {
        let endpoints = resolve(ProviderKind::Yandex, &LoginOptions::default()).unwrap();
        assert_eq!(endpoints.authorization, "https://oauth.yandex.ru/authorize");
        assert_eq!(endpoints.token, "https://oauth.yandex.ru/token");
        assert_eq!(endpoints.profile, "https://login.yandex.ru/info");
    }

    #[test]
    fn overrides_win() {
        let options = LoginOptions {
            token_url: Some("http://127.0.0.1:9000/token".into()),
            ..LoginOptions::default()
        };
        let endpoints = resolve(ProviderKind::Github, &options).unwrap();
        assert_eq!(endpoints.authorization, "https://github.com/login/oauth/authorize");
        assert_eq!(endpoints.token, "http://127.0.0.1:9000/token");
    }

    #[test]
    fn tenant_fields_build_urls() {
        let options = LoginOptions {
            server_url: Some("http://localhost:8080/".into()),
            realm: Some("master".into()),
            ..LoginOptions::default()
        };
        let endpoints = resolve(ProviderKind::Keycloak, &options).unwrap();
        assert_eq!(
            endpoints.token,
            "http://localhost:8080/realms/master/protocol/openid-connect/token"
        );

        let options = LoginOptions {
            user_pool_id: Some("pool".into()),
            region: Some("eu-west-1".into()),
            ..LoginOptions::default()
        };
        let endpoints = resolve(ProviderKind::Cognito, &options).unwrap();
        assert_eq!(endpoints.profile, "https://pool.auth.eu-west-1.amazoncognito.com/oauth2/userInfo");
    }

    #[test]
    fn missing_tenant_field_is_config_error() {
        let err = resolve(ProviderKind::Microsoft, &LoginOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SseAuthError::Config("Client Id, Client Secret and Tenant is Required".into())
        );
    }

    #[test]
    fn full_overrides_skip_tenant_fields() {
        let options = LoginOptions {
            authorization_url: Some("http://idp.test/auth".into()),
            token_url: Some("http://idp.test/token".into()),
            user_url: Some("http://idp.test/me".into()),
            ..LoginOptions::default()
        };
        let endpoints = resolve(ProviderKind::Auth0, &options).unwrap();
        assert_eq!(endpoints.profile, "http://idp.test/me");
    }

    #[test]
    fn regional_hosts() {
        let cn = LoginOptions { region: Some("cn".into()), ..LoginOptions::default() };
        assert_eq!(
            resolve(ProviderKind::BattleNet, &cn).unwrap().token,
            "https://oauth.battlenet.com.cn/token"
        );

        let sandbox = LoginOptions { sandbox: true, ..LoginOptions::default() };
        assert!(resolve(ProviderKind::Paypal, &sandbox).unwrap().authorization.contains("sandbox"));
    }
}
