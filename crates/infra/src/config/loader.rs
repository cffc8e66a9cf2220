//! Configuration loader
//!
//! Loads provider credentials and popup/HTTP settings from a config file and
//! environment variables.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment, if present
//! 2. Loads the config file (explicit path, or the first probed location)
//! 3. Overlays `SSE_AUTH_*` environment variables; environment values win
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SSE_AUTH_REDIRECT_URI`: Redirect URI for every provider
//! - `SSE_AUTH_POPUP_TIMEOUT_SECS`: Popup timeout, `0` disables it
//! - `SSE_AUTH_POPUP_POLL_INTERVAL_MS`: Popup poll interval
//! - `SSE_AUTH_POPUP_WIDTH` / `SSE_AUTH_POPUP_HEIGHT`: Popup size
//! - `SSE_AUTH_HTTP_TIMEOUT_SECS`: Per-request timeout
//! - `SSE_AUTH_HTTP_MAX_ATTEMPTS`: Attempts per request, retries included
//! - `SSE_AUTH_HTTP_BACKOFF_MS`: Base retry backoff
//! - `SSE_AUTH_{PROVIDER}_CLIENT_ID`, `_CLIENT_SECRET`, `_REDIRECT_URI`,
//!   `_SCOPE`, `_EMAIL_REQUIRED`, `_DOMAIN`, `_AUDIENCE`, `_TENANT`,
//!   `_SERVER_URL`, `_REALM`, `_REGION`, `_USER_POOL_ID`, `_API_KEY`,
//!   `_SANDBOX`, `_FIELDS`, `_AUTHORIZATION_URL`, `_TOKEN_URL`, `_USER_URL`
//!   where `{PROVIDER}` is the upper-cased identifier (`GITHUB`, `BATTLENET`).
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./sse-auth.toml`, `./sse-auth.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sse_auth_domain::{
    Config, LoginOptions, ProviderKind, Result, Secret, SseAuthError, ENV_PREFIX,
};

const CONFIG_FILE_NAMES: [&str; 4] = ["sse-auth.toml", "sse-auth.json", "config.toml", "config.json"];

/// Load configuration with the full layering strategy
///
/// A missing config file is not an error; environment variables alone are
/// enough.
///
/// # Errors
/// Returns `SseAuthError::Config` if a file exists but cannot be parsed, or
/// an environment variable holds an invalid value.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
    load_layered(None)
}

/// Load `path` (or the first probed file) and overlay the environment
///
/// # Errors
/// Returns `SseAuthError::Config` if an explicit `path` does not exist, a
/// file cannot be parsed, or an environment value is invalid.
pub fn load_layered(path: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env(&mut config)?;
    tracing::info!(providers = config.providers.len(), "Configuration loaded");
    Ok(config)
}

/// Load configuration from environment variables only
///
/// # Errors
/// Returns `SseAuthError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `SseAuthError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SseAuthError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SseAuthError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SseAuthError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, detecting the format by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SseAuthError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SseAuthError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SseAuthError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Overlay `SSE_AUTH_*` variables onto `config`.
fn apply_env(config: &mut Config) -> Result<()> {
    if let Some(redirect_uri) = env_string(&key("REDIRECT_URI")) {
        config.redirect_uri = Some(redirect_uri);
    }

    let popup = &mut config.popup;
    if let Some(timeout) = env_parse(&key("POPUP_TIMEOUT_SECS"))? {
        popup.timeout_secs = timeout;
    }
    if let Some(interval) = env_parse(&key("POPUP_POLL_INTERVAL_MS"))? {
        popup.poll_interval_ms = interval;
    }
    if let Some(width) = env_parse(&key("POPUP_WIDTH"))? {
        popup.width = width;
    }
    if let Some(height) = env_parse(&key("POPUP_HEIGHT"))? {
        popup.height = height;
    }

    let http = &mut config.http;
    if let Some(timeout) = env_parse(&key("HTTP_TIMEOUT_SECS"))? {
        http.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse(&key("HTTP_MAX_ATTEMPTS"))? {
        http.max_attempts = attempts;
    }
    if let Some(backoff) = env_parse(&key("HTTP_BACKOFF_MS"))? {
        http.backoff_ms = backoff;
    }

    for kind in ProviderKind::ALL {
        if let Some(overlay) = provider_env(kind)? {
            let current = config.providers.remove(&kind).unwrap_or_default();
            config.providers.insert(kind, current.merged_with(overlay));
        }
    }

    Ok(())
}

/// Options set through `SSE_AUTH_{PROVIDER}_*`, or `None` when none are.
fn provider_env(kind: ProviderKind) -> Result<Option<LoginOptions>> {
    let prefix = kind.as_str().to_ascii_uppercase();
    let var = |name: &str| env_string(&key(&format!("{prefix}_{name}")));
    let list = |name: &str| var(name).map(|value| split_list(&value)).unwrap_or_default();

    let options = LoginOptions {
        client_id: var("CLIENT_ID"),
        client_secret: var("CLIENT_SECRET").map(Secret::new),
        scope: list("SCOPE"),
        email_required: env_bool(&key(&format!("{prefix}_EMAIL_REQUIRED")), false),
        redirect_uri: var("REDIRECT_URI"),
        authorization_url: var("AUTHORIZATION_URL"),
        token_url: var("TOKEN_URL"),
        user_url: var("USER_URL"),
        domain: var("DOMAIN"),
        audience: var("AUDIENCE"),
        max_age: env_parse(&key(&format!("{prefix}_MAX_AGE")))?,
        tenant: var("TENANT"),
        server_url: var("SERVER_URL"),
        realm: var("REALM"),
        region: var("REGION"),
        user_pool_id: var("USER_POOL_ID"),
        sandbox: env_bool(&key(&format!("{prefix}_SANDBOX")), false),
        fields: list("FIELDS"),
        api_key: var("API_KEY").map(Secret::new),
        ..LoginOptions::default()
    };

    let any_set = options.client_id.is_some()
        || options.client_secret.is_some()
        || !options.scope.is_empty()
        || options.email_required
        || options.redirect_uri.is_some()
        || options.authorization_url.is_some()
        || options.token_url.is_some()
        || options.user_url.is_some()
        || options.domain.is_some()
        || options.audience.is_some()
        || options.max_age.is_some()
        || options.tenant.is_some()
        || options.server_url.is_some()
        || options.realm.is_some()
        || options.region.is_some()
        || options.user_pool_id.is_some()
        || options.sandbox
        || !options.fields.is_empty()
        || options.api_key.is_some();

    Ok(any_set.then_some(options))
}

fn key(name: &str) -> String {
    format!("{ENV_PREFIX}_{name}")
}

/// Comma or whitespace separated list.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-blank environment variable.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional environment variable.
///
/// # Errors
/// Returns `SseAuthError::Config` if the variable is set but does not parse.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| SseAuthError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::Builder;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for (name, _) in std::env::vars() {
            if name.starts_with("SSE_AUTH_") {
                std::env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("SSE_AUTH_TEST_BOOL_YES", "yes");
        std::env::set_var("SSE_AUTH_TEST_BOOL_UPPER", "TRUE");
        std::env::set_var("SSE_AUTH_TEST_BOOL_OFF", "off");

        assert!(env_bool("SSE_AUTH_TEST_BOOL_YES", false));
        assert!(env_bool("SSE_AUTH_TEST_BOOL_UPPER", false));
        assert!(!env_bool("SSE_AUTH_TEST_BOOL_OFF", true));
        assert!(env_bool("SSE_AUTH_TEST_BOOL_MISSING", true));

        clear_env();
    }

    #[test]
    fn test_load_from_env_provider_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SSE_AUTH_REDIRECT_URI", "http://127.0.0.1:8765");
        std::env::set_var("SSE_AUTH_POPUP_TIMEOUT_SECS", "60");
        std::env::set_var("SSE_AUTH_HTTP_MAX_ATTEMPTS", "5");
        std::env::set_var("SSE_AUTH_GITHUB_CLIENT_ID", "gh-id");
        std::env::set_var("SSE_AUTH_GITHUB_CLIENT_SECRET", "gh-secret");
        std::env::set_var("SSE_AUTH_GITHUB_SCOPE", "read:user, user:email");
        std::env::set_var("SSE_AUTH_BATTLENET_REGION", "eu");

        let config = load_from_env().unwrap();

        assert_eq!(config.popup.timeout_secs, 60);
        assert_eq!(config.http.max_attempts, 5);

        let github = config.login_options(ProviderKind::Github);
        assert_eq!(github.client_id(), Some("gh-id"));
        assert_eq!(github.client_secret().map(Secret::expose), Some("gh-secret"));
        assert_eq!(github.scope, vec!["read:user", "user:email"]);
        assert_eq!(github.redirect_uri.as_deref(), Some("http://127.0.0.1:8765"));

        assert_eq!(config.login_options(ProviderKind::BattleNet).region.as_deref(), Some("eu"));
        assert!(!config.providers.contains_key(&ProviderKind::Google));

        clear_env();
    }

    #[test]
    fn test_invalid_numeric_env_is_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SSE_AUTH_POPUP_WIDTH", "wide");
        let result = load_from_env();
        assert!(matches!(result, Err(SseAuthError::Config(msg)) if msg.contains("SSE_AUTH_POPUP_WIDTH")));

        clear_env();
    }

    #[test]
    fn test_env_overrides_file_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
            [popup]
            timeout_secs = 120

            [providers.google]
            client_id = "file-id"
            client_secret = "file-secret"
            "#
        )
        .unwrap();

        std::env::set_var("SSE_AUTH_GOOGLE_CLIENT_ID", "env-id");
        let config = load_layered(Some(file.path().to_path_buf())).unwrap();

        let google = config.login_options(ProviderKind::Google);
        assert_eq!(google.client_id(), Some("env-id"));
        assert_eq!(google.client_secret().map(Secret::expose), Some("file-secret"));
        assert_eq!(config.popup.timeout_secs, 120);

        clear_env();
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"providers": {{"discord": {{"client_id": "d", "profile_required": false}}}}}}"#)
            .unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        let discord = config.login_options(ProviderKind::Discord);
        assert_eq!(discord.client_id(), Some("d"));
        assert_eq!(discord.profile_required, Some(false));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/sse-auth.toml")));
        assert!(matches!(result, Err(SseAuthError::Config(msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = parse_config("", Path::new("config.yaml"));
        assert!(matches!(result, Err(SseAuthError::Config(msg)) if msg.contains("yaml")));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b  c,,"), vec!["a", "b", "c"]);
        assert!(split_list(" ").is_empty());
    }
}
