//! Static description of each identity provider
//!
//! Everything that differs between providers and can be stated as data
//! lives here; the few behaviours that need code (extra authorization
//! parameters, profile headers) match on [`ProviderKind`] next to their use.

use sse_auth_common::html::icons;
use sse_auth_domain::{ProviderKind, MISSING_CREDENTIALS_MESSAGE, TOKEN_ERROR_FALLBACK};

/// Authentication protocol spoken by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Authorization-code grant.
    OAuth2,
    /// OpenID 2.0 assertion verified with `check_authentication` (Steam).
    OpenId2,
}

/// How the authorization code is exchanged for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRequestStyle {
    /// POST JSON body carrying the client credentials.
    Json,
    /// POST form body carrying the client credentials.
    Form,
    /// POST form body, client credentials in an HTTP Basic header.
    FormBasic,
    /// GET with every parameter in the query string.
    Query,
}

/// How the access token is presented on the profile request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAuth {
    /// `Authorization: Bearer <token>`.
    Bearer,
    /// `Authorization: <token_type> <token>`, `Bearer` when absent.
    TokenType,
    /// `Authorization: OAuth <token>`.
    OAuth,
    /// `access_token` query parameter.
    QueryParam,
}

/// Where the user object sits in the profile response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileExtract {
    Whole,
    /// `data[0]` (Twitch Helix).
    FirstOfData,
    /// `response.players[0]` (Steam Web API).
    FirstPlayer,
}

/// Per-provider constants driving the generic login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub kind: ProviderKind,
    pub protocol: Protocol,
    /// Used when the caller requests no scope.
    pub default_scope: &'static [&'static str],
    /// Always added.
    pub required_scope: &'static [&'static str],
    /// Added when `email_required` is set.
    pub email_scope: Option<&'static str>,
    /// Added when `profile_required` is set (default on).
    pub profile_scope: Option<&'static str>,
    pub token_request: TokenRequestStyle,
    /// Message used when the token response carries no description.
    pub token_error_fallback: &'static str,
    pub profile_auth: ProfileAuth,
    pub profile_extract: ProfileExtract,
    /// Message for missing credentials or provider-specific settings.
    pub config_message: &'static str,
    pub icon: &'static str,
}

const fn oauth2(kind: ProviderKind, icon: &'static str) -> ProviderDescriptor {
    ProviderDescriptor {
        kind,
        protocol: Protocol::OAuth2,
        default_scope: &[],
        required_scope: &[],
        email_scope: None,
        profile_scope: None,
        token_request: TokenRequestStyle::Form,
        token_error_fallback: TOKEN_ERROR_FALLBACK,
        profile_auth: ProfileAuth::Bearer,
        profile_extract: ProfileExtract::Whole,
        config_message: MISSING_CREDENTIALS_MESSAGE,
        icon,
    }
}

static AUTH0: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["openid", "offline_access"],
    email_scope: Some("email"),
    token_request: TokenRequestStyle::Json,
    profile_auth: ProfileAuth::TokenType,
    config_message: "Client Id, Client Secret and Domain is Required",
    ..oauth2(ProviderKind::Auth0, icons::AUTH0)
};

static BATTLE_NET: ProviderDescriptor = ProviderDescriptor {
    required_scope: &["openid"],
    token_request: TokenRequestStyle::FormBasic,
    ..oauth2(ProviderKind::BattleNet, icons::BATTLE_NET)
};

static COGNITO: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["openid", "profile"],
    token_error_fallback: "Cognito login failed: Error retrieving access token",
    profile_auth: ProfileAuth::TokenType,
    config_message: "Client Id, Client Secret, User Pool Id, region is Required",
    ..oauth2(ProviderKind::Cognito, icons::COGNITO)
};

static DISCORD: ProviderDescriptor = ProviderDescriptor {
    email_scope: Some("email"),
    profile_scope: Some("identify"),
    ..oauth2(ProviderKind::Discord, icons::DISCORD)
};

static FACEBOOK: ProviderDescriptor = ProviderDescriptor {
    required_scope: &["email"],
    token_request: TokenRequestStyle::Query,
    profile_auth: ProfileAuth::QueryParam,
    ..oauth2(ProviderKind::Facebook, icons::FACEBOOK)
};

static GITHUB: ProviderDescriptor = ProviderDescriptor {
    email_scope: Some("user:email"),
    token_request: TokenRequestStyle::Json,
    ..oauth2(ProviderKind::Github, icons::GITHUB)
};

static GOOGLE: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["email", "profile"],
    token_request: TokenRequestStyle::Json,
    ..oauth2(ProviderKind::Google, icons::GOOGLE)
};

static KEYCLOAK: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["openid"],
    config_message: "Client Id, Client Secret, Server Url, Realm is Required",
    ..oauth2(ProviderKind::Keycloak, icons::KEYCLOAK)
};

static LINKEDIN: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["profile", "openid", "email"],
    email_scope: Some("email"),
    ..oauth2(ProviderKind::Linkedin, icons::LINKEDIN)
};

static MICROSOFT: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["User.Read"],
    profile_auth: ProfileAuth::TokenType,
    config_message: "Client Id, Client Secret and Tenant is Required",
    ..oauth2(ProviderKind::Microsoft, icons::MICROSOFT)
};

static PAYPAL: ProviderDescriptor = ProviderDescriptor {
    required_scope: &["openid"],
    email_scope: Some("email"),
    token_request: TokenRequestStyle::FormBasic,
    ..oauth2(ProviderKind::Paypal, icons::PAYPAL)
};

static SPOTIFY: ProviderDescriptor = ProviderDescriptor {
    email_scope: Some("user-read-email"),
    token_request: TokenRequestStyle::FormBasic,
    ..oauth2(ProviderKind::Spotify, icons::SPOTIFY)
};

static STEAM: ProviderDescriptor = ProviderDescriptor {
    protocol: Protocol::OpenId2,
    token_request: TokenRequestStyle::Query,
    profile_auth: ProfileAuth::QueryParam,
    profile_extract: ProfileExtract::FirstPlayer,
    config_message: "Steam API key is Required",
    ..oauth2(ProviderKind::Steam, icons::STEAM)
};

static TWITCH: ProviderDescriptor = ProviderDescriptor {
    email_scope: Some("user:read:email"),
    token_error_fallback: "Twitch login failed: Error retrieving access token",
    profile_extract: ProfileExtract::FirstOfData,
    ..oauth2(ProviderKind::Twitch, icons::TWITCH)
};

static X: ProviderDescriptor = ProviderDescriptor {
    default_scope: &["tweet.read", "users.read", "offline.access"],
    token_request: TokenRequestStyle::FormBasic,
    ..oauth2(ProviderKind::X, icons::X)
};

static XSUAA: ProviderDescriptor = ProviderDescriptor {
    profile_auth: ProfileAuth::TokenType,
    config_message: "Client Id, Client Secret and Domain is Required",
    ..oauth2(ProviderKind::Xsuaa, icons::XSUAA)
};

static YANDEX: ProviderDescriptor = ProviderDescriptor {
    email_scope: Some("login:email"),
    profile_auth: ProfileAuth::OAuth,
    ..oauth2(ProviderKind::Yandex, icons::YANDEX)
};

/// Descriptor for `kind`.
#[must_use]
pub const fn descriptor(kind: ProviderKind) -> &'static ProviderDescriptor {
    match kind {
        ProviderKind::Auth0 => &AUTH0,
        ProviderKind::BattleNet => &BATTLE_NET,
        ProviderKind::Cognito => &COGNITO,
        ProviderKind::Discord => &DISCORD,
        ProviderKind::Facebook => &FACEBOOK,
        ProviderKind::Github => &GITHUB,
        ProviderKind::Google => &GOOGLE,
        ProviderKind::Keycloak => &KEYCLOAK,
        ProviderKind::Linkedin => &LINKEDIN,
        ProviderKind::Microsoft => &MICROSOFT,
        ProviderKind::Paypal => &PAYPAL,
        ProviderKind::Spotify => &SPOTIFY,
        ProviderKind::Steam => &STEAM,
        ProviderKind::Twitch => &TWITCH,
        ProviderKind::X => &X,
        ProviderKind::Xsuaa => &XSUAA,
        ProviderKind::Yandex => &YANDEX,
    }
}
