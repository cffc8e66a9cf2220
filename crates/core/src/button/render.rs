//! Button markup

use sse_auth_common::html::{clsx, escape_html, icons, ClassValue};
use sse_auth_domain::ProviderKind;

/// Which of the two button components to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Text,
    Icon,
}

/// Presentation options for the icon variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    /// Extra class appended after the base class.
    pub class_name: Option<String>,
    /// Adds `sse-auth__call-controls__button--variant-{v}`.
    pub color_variant: Option<String>,
    /// SVG markup replacing the provider icon.
    pub icon: Option<String>,
}

/// Label shown on the button.
#[must_use]
pub fn button_label(provider: ProviderKind, variant: ButtonVariant, loading: bool) -> String {
    match (loading, variant) {
        (true, ButtonVariant::Text) => "Loading...".to_string(),
        (true, ButtonVariant::Icon) => "Logging...".to_string(),
        (false, _) => format!("Login with {}", provider.display_name()),
    }
}

/// Render the button as HTML.
#[must_use]
pub fn render_button(provider: ProviderKind, style: &ButtonStyle, loading: bool) -> String {
    let label = escape_html(&button_label(provider, style.variant, loading));
    let disabled = if loading { " disabled" } else { "" };

    match style.variant {
        ButtonVariant::Text => {
            format!(r#"<button type="button" class="sse-auth__text-button"{disabled}>{label}</button>"#)
        }
        ButtonVariant::Icon => {
            let classes = escape_html(&clsx([
                ClassValue::from("sse-auth__call-controls__button"),
                ClassValue::from(style.class_name.clone()),
                ClassValue::map([
                    (
                        format!(
                            "sse-auth__call-controls__button--variant-{}",
                            style.color_variant.as_deref().unwrap_or_default()
                        ),
                        style.color_variant.as_deref().is_some_and(|v| !v.is_empty()),
                    ),
                    ("sse-auth__call-controls__button--enabled".to_string(), !loading),
                ]),
            ]));
            let icon = if loading {
                icons::LOADING
            } else {
                style.icon.as_deref().unwrap_or_else(|| provider_icon(provider))
            };
            let aria = escape_html(&button_label(provider, ButtonVariant::Icon, false));
            format!(
                r#"<button type="button" class="{classes}" aria-label="{aria}"{disabled}><span class="sse-auth_icon"><div>{icon}</div></span><div class="text-button">{label}</div></button>"#
            )
        }
    }
}

/// Bundled SVG for `provider`.
#[must_use]
pub const fn provider_icon(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Auth0 => icons::AUTH0,
        ProviderKind::BattleNet => icons::BATTLE_NET,
        ProviderKind::Cognito => icons::COGNITO,
        ProviderKind::Discord => icons::DISCORD,
        ProviderKind::Facebook => icons::FACEBOOK,
        ProviderKind::Github => icons::GITHUB,
        ProviderKind::Google => icons::GOOGLE,
        ProviderKind::Keycloak => icons::KEYCLOAK,
        ProviderKind::Linkedin => icons::LINKEDIN,
        ProviderKind::Microsoft => icons::MICROSOFT,
        ProviderKind::Paypal => icons::PAYPAL,
        ProviderKind::Spotify => icons::SPOTIFY,
        ProviderKind::Steam => icons::STEAM,
        ProviderKind::Twitch => icons::TWITCH,
        ProviderKind::X => icons::X,
        ProviderKind::Xsuaa => icons::XSUAA,
        ProviderKind::Yandex => icons::YANDEX,
    }
}
