//! Lenient URL parsing and stringification
//!
//! Unlike [`url::Url`], these helpers accept relative paths, protocol-relative
//! URLs (`//host/path`) and script schemes without failing, and round-trip
//! whatever they are given.

use once_cell::sync::Lazy;
use regex::Regex;

static PROTOCOL_STRICT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\w\x00+.-]{2,}:([/\\]{1,2})")
        .expect("PROTOCOL_STRICT_REGEX should compile - this is a bug")
});

static PROTOCOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\w\x00+.-]{2,}:([/\\]{2})?")
        .expect("PROTOCOL_REGEX should compile - this is a bug")
});

static PROTOCOL_RELATIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([/\\]\s*){2,}[^/\\]")
        .expect("PROTOCOL_RELATIVE_REGEX should compile - this is a bug")
});

static SPECIAL_PROTOCOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\s\x00]*(blob:|data:|javascript:|vbscript:)(.*)")
        .expect("SPECIAL_PROTOCOL_REGEX should compile - this is a bug")
});

static AUTHORITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\x00]*([\w+.-]{2,}:)?//([^/@]+@)?(.*)")
        .expect("AUTHORITY_REGEX should compile - this is a bug")
});

static HOST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^#/?]*)(.*)").expect("HOST_REGEX should compile - this is a bug")
});

static PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^#?]*)(\?[^#]*)?(#.*)?").expect("PATH_REGEX should compile - this is a bug")
});

/// Components of a parsed URL or path.
///
/// `protocol`, `host` and `auth` are `None` for bare paths. `search` keeps its
/// leading `?` and `hash` its leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub auth: Option<String>,
    /// Only set for `blob:`/`data:`/`javascript:`/`vbscript:` URLs.
    pub href: Option<String>,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    /// `//host/path` with no scheme.
    pub protocol_relative: bool,
}

/// Options for [`has_protocol_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocolOptions {
    /// Treat `//host` as having a protocol.
    pub accept_relative: bool,
    /// Require `scheme:/` or `scheme://`; a bare `scheme:` is rejected.
    pub strict: bool,
}

/// Whether `input` starts with a scheme, optionally accepting `//host`.
#[must_use]
pub fn has_protocol(input: &str, accept_relative: bool) -> bool {
    has_protocol_with(input, ProtocolOptions { accept_relative, strict: false })
}

/// [`has_protocol`] with full options.
#[must_use]
pub fn has_protocol_with(input: &str, opts: ProtocolOptions) -> bool {
    if opts.strict {
        return PROTOCOL_STRICT_REGEX.is_match(input);
    }
    PROTOCOL_REGEX.is_match(input)
        || (opts.accept_relative && PROTOCOL_RELATIVE_REGEX.is_match(input))
}

/// Percent-decode `text`, returning it unchanged when the escapes are invalid.
///
/// `+` is not treated as a space.
#[must_use]
pub fn decode(text: &str) -> String {
    urlencoding::decode(text).map_or_else(|_| text.to_string(), std::borrow::Cow::into_owned)
}

/// Parse an absolute, protocol-relative or relative URL.
///
/// Inputs without a protocol are parsed as paths, or re-parsed with
/// `default_protocol` prepended when one is given.
#[must_use]
pub fn parse_url(input: &str, default_protocol: Option<&str>) -> ParsedUrl {
    if let Some(caps) = SPECIAL_PROTOCOL_REGEX.captures(input) {
        let proto = caps.get(1).map_or("", |m| m.as_str());
        let pathname = caps.get(2).map_or("", |m| m.as_str());
        return ParsedUrl {
            protocol: Some(proto.to_lowercase()),
            host: Some(String::new()),
            auth: Some(String::new()),
            href: Some(format!("{proto}{pathname}")),
            pathname: pathname.to_string(),
            ..ParsedUrl::default()
        };
    }

    if !has_protocol(input, true) {
        return match default_protocol {
            Some(proto) if !proto.is_empty() => parse_url(&format!("{proto}{input}"), None),
            _ => parse_path(input),
        };
    }

    let normalized = input.replace('\\', "/");
    let (protocol, auth, host_and_path) = AUTHORITY_REGEX.captures(&normalized).map_or_else(
        || (String::new(), String::new(), String::new()),
        |caps| {
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
            (group(1), group(2), group(3))
        },
    );

    let (host, mut path) = HOST_REGEX.captures(&host_and_path).map_or_else(
        || (String::new(), String::new()),
        |caps| {
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
            (group(1), group(2))
        },
    );

    if protocol == "file:" {
        path = strip_drive_letter_slash(&path);
    }

    let ParsedUrl { pathname, search, hash, .. } = parse_path(&path);
    let auth = auth.strip_suffix('@').unwrap_or(&auth).to_string();

    ParsedUrl {
        protocol_relative: protocol.is_empty(),
        protocol: Some(protocol.to_lowercase()),
        host: Some(host),
        auth: Some(auth),
        href: None,
        pathname,
        search,
        hash,
    }
}

/// `file:///C:/x` keeps the drive letter as the first path segment.
fn strip_drive_letter_slash(path: &str) -> String {
    let drive = path
        .as_bytes()
        .windows(3)
        .position(|w| w[0] == b'/' && w[1].is_ascii_alphabetic() && w[2] == b':');
    match drive {
        Some(i) => format!("{}{}", &path[..i], &path[i + 1..]),
        None => path.to_string(),
    }
}

/// Split a path into pathname, `?search` and `#hash`.
///
/// ```
/// use sse_auth_common::url::parse_path;
///
/// let parsed = parse_path("/a?b=1#c");
/// assert_eq!(parsed.pathname, "/a");
/// assert_eq!(parsed.search, "?b=1");
/// assert_eq!(parsed.hash, "#c");
/// ```
#[must_use]
pub fn parse_path(input: &str) -> ParsedUrl {
    let (pathname, search, hash) = PATH_REGEX.captures(input).map_or_else(
        || (String::new(), String::new(), String::new()),
        |caps| {
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
            (group(1), group(2), group(3))
        },
    );
    ParsedUrl { pathname, search, hash, ..ParsedUrl::default() }
}

/// Rebuild a URL string from its parts.
#[must_use]
pub fn stringify_parsed_url(parsed: &ParsedUrl) -> String {
    let search = if parsed.search.is_empty() {
        String::new()
    } else if parsed.search.starts_with('?') {
        parsed.search.clone()
    } else {
        format!("?{}", parsed.search)
    };
    let auth = match parsed.auth.as_deref() {
        Some(auth) if !auth.is_empty() => format!("{auth}@"),
        _ => String::new(),
    };
    let protocol = parsed.protocol.as_deref().unwrap_or_default();
    let proto = if !protocol.is_empty() || parsed.protocol_relative {
        format!("{protocol}//")
    } else {
        String::new()
    };
    format!(
        "{proto}{auth}{host}{pathname}{search}{hash}",
        host = parsed.host.as_deref().unwrap_or_default(),
        pathname = parsed.pathname,
        hash = parsed.hash,
    )
}
