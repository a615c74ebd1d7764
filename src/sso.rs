//! Remote-authentication login URL construction.
//!
//! Zendesk's classic single-sign-on scheme signs a login URL with a plain
//! MD5 digest over `name + email + token + timestamp`. MD5 is used here
//! solely because the remote end of this fixed legacy protocol verifies
//! exactly that digest; it is not a security recommendation.

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

/// Builds a signed login URL for the current time.
///
/// See [`login_url_at`] for the URL shape; this wrapper stamps the URL
/// with the time of the call.
#[must_use]
pub fn login_url(
    auth_token: &str,
    https_url: &str,
    name: &str,
    email: &str,
    return_to: Option<&str>,
) -> String {
    login_url_at(auth_token, https_url, name, email, return_to, Utc::now())
}

/// Builds a signed login URL for a fixed timestamp.
///
/// Produces
/// `{base}/access/remote/?name={name}&email={email}&timestamp={ts}&hash={hash}`
/// with `name` and `email` percent-encoded, `ts` in unix seconds, and
/// `hash` the lowercase hex MD5 of `name + email + token + ts`. When
/// `return_to` is given it is appended verbatim as `&return_to={url}` —
/// the service expects it unencoded.
///
/// Pure in its inputs, so signatures can be reproduced bit-for-bit.
#[must_use]
pub fn login_url_at(
    auth_token: &str,
    https_url: &str,
    name: &str,
    email: &str,
    return_to: Option<&str>,
    timestamp: DateTime<Utc>,
) -> String {
    let timestamp = timestamp.timestamp();
    let message = format!("{name}{email}{auth_token}{timestamp}");
    let hash = hex::encode(Md5::digest(message.as_bytes()));

    let mut url = format!(
        "{https_url}/access/remote/?name={}&email={}&timestamp={timestamp}&hash={hash}",
        urlencoding::encode(name),
        urlencoding::encode(email),
    );
    if let Some(return_to) = return_to {
        if !return_to.is_empty() {
            url.push_str("&return_to=");
            url.push_str(return_to);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_login_url_matches_reference_digest() {
        let timestamp = Utc.timestamp_opt(1_288_872_000, 0).unwrap();
        let url = login_url_at(
            "abc123",
            "https://company.zendesk.com",
            "John Doe",
            "john@example.com",
            None,
            timestamp,
        );

        assert_eq!(
            url,
            "https://company.zendesk.com/access/remote/?name=John%20Doe\
             &email=john%40example.com&timestamp=1288872000\
             &hash=5ce935ce02cb3a1cf828c4768ae603f1"
        );
    }

    #[test]
    fn test_hash_covers_all_inputs() {
        let timestamp = Utc.timestamp_opt(946_684_800, 0).unwrap();
        let url = login_url_at(
            "topsecret",
            "https://support.example.org",
            "Jane Roller",
            "jane+roller@example.org",
            None,
            timestamp,
        );

        assert!(url.contains("hash=f7d4f2f6126f3e4cb7429ce772ba33fd"));
        assert!(url.contains("name=Jane%20Roller"));
        assert!(url.contains("email=jane%2Broller%40example.org"));
    }

    #[test]
    fn test_return_to_is_appended_verbatim() {
        let timestamp = Utc.timestamp_opt(1_288_872_000, 0).unwrap();
        let url = login_url_at(
            "abc123",
            "https://company.zendesk.com",
            "John Doe",
            "john@example.com",
            Some("https://company.example.com/after"),
            timestamp,
        );

        assert!(url.ends_with("&return_to=https://company.example.com/after"));
    }

    #[test]
    fn test_empty_return_to_is_omitted() {
        let timestamp = Utc.timestamp_opt(1_288_872_000, 0).unwrap();
        let url = login_url_at(
            "abc123",
            "https://company.zendesk.com",
            "John Doe",
            "john@example.com",
            Some(""),
            timestamp,
        );

        assert!(!url.contains("return_to"));
    }
}
