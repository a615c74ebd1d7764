//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated Zendesk account base URL.
///
/// Accepts `http://` or `https://` URLs with a non-empty host and strips
/// any trailing slash, so request paths can always be appended with a
/// single `/`.
///
/// # Example
///
/// ```rust
/// use zendesk_api::AccountUrl;
///
/// let url = AccountUrl::new("https://company.zendesk.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://company.zendesk.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountUrl(String);

impl AccountUrl {
    /// Creates a new validated account URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountUrl`] when the URL has no
    /// `http`/`https` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidAccountUrl { url }),
        }
    }
}

impl AsRef<str> for AccountUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated account username (email or agent login).
///
/// # Example
///
/// ```rust
/// use zendesk_api::Username;
///
/// let user = Username::new("agent@example.com").unwrap();
/// assert_eq!(user.as_ref(), "agent@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the value is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated account password or API token.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use zendesk_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the value is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_url_accepts_https_and_strips_trailing_slash() {
        let url = AccountUrl::new("https://company.zendesk.com/").unwrap();
        assert_eq!(url.as_ref(), "https://company.zendesk.com");
    }

    #[test]
    fn test_account_url_accepts_http() {
        let url = AccountUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_account_url_rejects_missing_scheme() {
        assert!(matches!(
            AccountUrl::new("company.zendesk.com"),
            Err(ConfigError::InvalidAccountUrl { .. })
        ));
    }

    #[test]
    fn test_account_url_rejects_empty_host() {
        assert!(matches!(
            AccountUrl::new("https://"),
            Err(ConfigError::InvalidAccountUrl { .. })
        ));
    }

    #[test]
    fn test_username_rejects_empty() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::new("s3cret").unwrap();
        let debug = format!("{password:?}");
        assert!(!debug.contains("s3cret"));
        assert_eq!(debug, "Password(*****)");
    }

    #[test]
    fn test_password_rejects_empty() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    }
}
