//! Random identifiers for OAuth `state`, PKCE verifiers and nonces

use rand::distributions::{Alphanumeric, Uniform};
use rand::Rng;
use uuid::Uuid;

/// Random ASCII letters and digits.
#[must_use]
pub fn generate_random_string(len: usize) -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

/// Random decimal digits. Leading zeros are allowed.
#[must_use]
pub fn generate_random_number(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(Uniform::new_inclusive(b'0', b'9'))
        .take(len)
        .map(char::from)
        .collect()
}

/// Random (version 4) UUID in hyphenated lowercase form.
#[must_use]
pub fn generate_random_uuid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_string_is_alphanumeric() {
        let value = generate_random_string(32);
        assert_eq!(value.len(), 32);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(value, generate_random_string(32));
    }

    #[test]
    fn random_number_is_digits() {
        let value = generate_random_number(12);
        assert_eq!(value.len(), 12);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
        assert!(generate_random_number(0).is_empty());
    }

    #[test]
    fn uuid_is_version_4() {
        let value = generate_random_uuid();
        assert_eq!(value.len(), 36);
        assert_eq!(value.as_bytes()[14], b'4');
        assert!(matches!(value.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
    }
}
