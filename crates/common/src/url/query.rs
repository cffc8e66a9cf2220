//! Query-string encoding and decoding

use std::collections::BTreeMap;

use ::url::form_urlencoded;

/// Flat query map: one value per key, last occurrence wins.
pub type QueryMap = BTreeMap<String, String>;

/// Decode a query string (with or without the leading `?`) into a flat map.
///
/// `application/x-www-form-urlencoded` rules apply: `+` is a space and
/// percent escapes are decoded. Repeated keys keep the last value.
#[must_use]
pub fn to_query(query: &str) -> QueryMap {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

/// Encode key/value pairs as a form-urlencoded query string, in order.
#[must_use]
pub fn build_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Append `query` to `base`, using `&` when `base` already has a query.
#[must_use]
pub fn append_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

/// `base` with any query string and fragment removed.
#[must_use]
pub fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flat_map() {
        let query = to_query("?code=abc%2F123&state=x+y&scope=a%20b");
        assert_eq!(query["code"], "abc/123");
        assert_eq!(query["state"], "x y");
        assert_eq!(query["scope"], "a b");
    }

    #[test]
    fn last_duplicate_wins() {
        let query = to_query("a=1&a=2");
        assert_eq!(query.len(), 1);
        assert_eq!(query["a"], "2");
    }

    #[test]
    fn empty_query_is_empty_map() {
        assert!(to_query("").is_empty());
        assert!(to_query("?").is_empty());
    }

    #[test]
    fn build_query_keeps_order_and_encodes() {
        let query = build_query([("response_type", "code"), ("scope", "openid email"), ("redirect_uri", "http://localhost:3000/")]);
        assert_eq!(query, "response_type=code&scope=openid+email&redirect_uri=http%3A%2F%2Flocalhost%3A3000%2F");
    }

    #[test]
    fn append_query_picks_separator() {
        assert_eq!(append_query("https://a.test/me", "x=1"), "https://a.test/me?x=1");
        assert_eq!(append_query("https://a.test/me?fields=id", "x=1"), "https://a.test/me?fields=id&x=1");
        assert_eq!(append_query("https://a.test/me", ""), "https://a.test/me");
    }

    #[test]
    fn strip_query_removes_query_and_fragment() {
        assert_eq!(strip_query("http://localhost:3000/cb?code=1#x"), "http://localhost:3000/cb");
        assert_eq!(strip_query("http://localhost:3000/"), "http://localhost:3000/");
    }
}
