//! Identity provider identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SseAuthError;

/// Every identity provider with a login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Auth0,
    #[serde(alias = "battle.net", alias = "battledotnet")]
    BattleNet,
    Cognito,
    Discord,
    Facebook,
    Github,
    Google,
    Keycloak,
    Linkedin,
    Microsoft,
    Paypal,
    Spotify,
    Steam,
    Twitch,
    #[serde(alias = "twitter")]
    X,
    Xsuaa,
    Yandex,
}

impl ProviderKind {
    /// All providers, in display order.
    pub const ALL: [Self; 17] = [
        Self::Auth0,
        Self::BattleNet,
        Self::Cognito,
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Google,
        Self::Keycloak,
        Self::Linkedin,
        Self::Microsoft,
        Self::Paypal,
        Self::Spotify,
        Self::Steam,
        Self::Twitch,
        Self::X,
        Self::Xsuaa,
        Self::Yandex,
    ];

    /// Stable lowercase identifier used in configuration keys and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth0 => "auth0",
            Self::BattleNet => "battlenet",
            Self::Cognito => "cognito",
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Google => "google",
            Self::Keycloak => "keycloak",
            Self::Linkedin => "linkedin",
            Self::Microsoft => "microsoft",
            Self::Paypal => "paypal",
            Self::Spotify => "spotify",
            Self::Steam => "steam",
            Self::Twitch => "twitch",
            Self::X => "x",
            Self::Xsuaa => "xsuaa",
            Self::Yandex => "yandex",
        }
    }

    /// Human readable name shown on buttons ("Login with GitHub").
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Auth0 => "Auth0",
            Self::BattleNet => "Battle.net",
            Self::Cognito => "Cognito",
            Self::Discord => "Discord",
            Self::Facebook => "Facebook",
            Self::Github => "GitHub",
            Self::Google => "Google",
            Self::Keycloak => "Keycloak",
            Self::Linkedin => "LinkedIn",
            Self::Microsoft => "Microsoft",
            Self::Paypal => "PayPal",
            Self::Spotify => "Spotify",
            Self::Steam => "Steam",
            Self::Twitch => "Twitch",
            Self::X => "X",
            Self::Xsuaa => "XSUAA",
            Self::Yandex => "Yandex",
        }
    }

    /// Name given to the popup window for this provider.
    #[must_use]
    pub fn window_name(self) -> String {
        format!("{} Login", self.display_name())
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = SseAuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "battle.net" | "battledotnet" => return Ok(Self::BattleNet),
            "twitter" => return Ok(Self::X),
            _ => {}
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| SseAuthError::InvalidInput(format!("unknown provider: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_and_aliases() {
        assert_eq!("github".parse::<ProviderKind>().unwrap(), ProviderKind::Github);
        assert_eq!("GitHub".parse::<ProviderKind>().unwrap(), ProviderKind::Github);
        assert_eq!("twitter".parse::<ProviderKind>().unwrap(), ProviderKind::X);
        assert_eq!("battle.net".parse::<ProviderKind>().unwrap(), ProviderKind::BattleNet);
        assert!(matches!(
            "myspace".parse::<ProviderKind>(),
            Err(SseAuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn identifiers_round_trip_through_display() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn window_name_uses_display_name() {
        assert_eq!(ProviderKind::Linkedin.window_name(), "LinkedIn Login");
    }
}
