//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and
//! actionable.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{ConfigError, Username};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`crate::ZendeskConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the account email or agent login.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the account password or API token.")]
    EmptyPassword,

    /// Account URL is invalid.
    #[error("Invalid account URL '{url}'. Expected format: 'https://company.zendesk.com'.")]
    InvalidAccountUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The pagination ceiling must allow at least one page.
    #[error("Invalid page ceiling {ceiling}. At least one page must be fetched.")]
    InvalidPageCeiling {
        /// The rejected ceiling value.
        ceiling: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_error_message() {
        let message = ConfigError::EmptyUsername.to_string();
        assert!(message.contains("Username cannot be empty"));
    }

    #[test]
    fn test_invalid_account_url_error_message() {
        let error = ConfigError::InvalidAccountUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "username" };
        let message = error.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPassword;
        let _: &dyn std::error::Error = &error;
    }
}
