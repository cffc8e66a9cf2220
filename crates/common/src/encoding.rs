//! Base64 helpers for HTTP Basic client credentials

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CommonError, CommonResult};

/// Standard (padded) base64 of the UTF-8 bytes of `input`.
///
/// ```
/// use sse_auth_common::encoding::encode_base64;
///
/// assert_eq!(encode_base64("id:secret"), "aWQ6c2VjcmV0");
/// ```
#[must_use]
pub fn encode_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Inverse of [`encode_base64`].
///
/// # Errors
/// Returns [`CommonError::Base64`] for malformed input and
/// [`CommonError::Utf8`] when the decoded bytes are not text.
pub fn decode_base64(input: &str) -> CommonResult<String> {
    let bytes = STANDARD.decode(input.trim()).map_err(|e| CommonError::Base64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| CommonError::Utf8)
}

/// `Authorization` header value for HTTP Basic client authentication.
#[must_use]
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", encode_base64(&format!("{client_id}:{client_secret}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_client_credentials() {
        assert_eq!(encode_base64("id:secret"), "aWQ6c2VjcmV0");
        assert_eq!(decode_base64("aWQ6c2VjcmV0").unwrap(), "id:secret");
    }

    #[test]
    fn pads_short_input() {
        assert_eq!(encode_base64("a"), "YQ==");
        assert_eq!(encode_base64("ab"), "YWI=");
        assert_eq!(encode_base64(""), "");
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(encode_base64("é"), "w6k=");
        assert_eq!(decode_base64("w6k=").unwrap(), "é");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(decode_base64("not base64!"), Err(CommonError::Base64(_))));
        assert_eq!(decode_base64("/w=="), Err(CommonError::Utf8));
    }

    #[test]
    fn basic_credentials_header() {
        assert_eq!(basic_credentials("id", "secret"), "Basic aWQ6c2VjcmV0");
    }
}
