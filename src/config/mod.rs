//! Configuration types for the Zendesk API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with a Zendesk account.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ZendeskConfig`]: the immutable configuration value injected into the client
//! - [`ZendeskConfigBuilder`]: a builder for constructing [`ZendeskConfig`] instances
//! - [`AccountUrl`]: a validated account base URL
//! - [`Username`] / [`Password`]: validated basic-auth credentials, with the
//!   password masked in debug output
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::{AccountUrl, Password, Username, ZendeskConfig};
//!
//! let config = ZendeskConfig::builder()
//!     .account_url(AccountUrl::new("https://company.zendesk.com").unwrap())
//!     .username(Username::new("agent@example.com").unwrap())
//!     .password(Password::new("hunter2").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_ceiling(), 25);
//! ```

mod newtypes;

pub use newtypes::{AccountUrl, Password, Username};

use crate::error::ConfigError;

/// Default hard ceiling on pages fetched by the fetch-all helpers.
pub const DEFAULT_PAGE_CEILING: u32 = 25;

/// Immutable configuration for the Zendesk API client.
///
/// Holds the account base URL, basic-auth credentials, and the pagination
/// ceiling. The value is constructed once via the builder and injected into
/// [`crate::ZendeskClient`]; nothing in it mutates after construction.
///
/// # Thread Safety
///
/// `ZendeskConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ZendeskConfig {
    account_url: AccountUrl,
    username: Username,
    password: Password,
    page_ceiling: u32,
}

// Verify ZendeskConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskConfig>();
};

impl ZendeskConfig {
    /// Creates a new builder for constructing a `ZendeskConfig`.
    #[must_use]
    pub fn builder() -> ZendeskConfigBuilder {
        ZendeskConfigBuilder::new()
    }

    /// Returns the account base URL.
    #[must_use]
    pub const fn account_url(&self) -> &AccountUrl {
        &self.account_url
    }

    /// Returns the basic-auth username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the basic-auth password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the hard ceiling on pages fetched by the fetch-all helpers.
    #[must_use]
    pub const fn page_ceiling(&self) -> u32 {
        self.page_ceiling
    }
}

/// Builder for constructing [`ZendeskConfig`] instances.
#[derive(Debug, Default)]
pub struct ZendeskConfigBuilder {
    account_url: Option<AccountUrl>,
    username: Option<Username>,
    password: Option<Password>,
    page_ceiling: Option<u32>,
}

impl ZendeskConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the account base URL (required).
    #[must_use]
    pub fn account_url(mut self, account_url: AccountUrl) -> Self {
        self.account_url = Some(account_url);
        self
    }

    /// Sets the basic-auth username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the basic-auth password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Overrides the pagination ceiling (default
    /// [`DEFAULT_PAGE_CEILING`]).
    #[must_use]
    pub const fn page_ceiling(mut self, ceiling: u32) -> Self {
        self.page_ceiling = Some(ceiling);
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when a required field
    /// was not set, or [`ConfigError::InvalidPageCeiling`] for a zero
    /// ceiling.
    pub fn build(self) -> Result<ZendeskConfig, ConfigError> {
        let account_url = self
            .account_url
            .ok_or(ConfigError::MissingRequiredField { field: "account_url" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
        let page_ceiling = self.page_ceiling.unwrap_or(DEFAULT_PAGE_CEILING);
        if page_ceiling == 0 {
            return Err(ConfigError::InvalidPageCeiling { ceiling: page_ceiling });
        }

        Ok(ZendeskConfig {
            account_url,
            username,
            password,
            page_ceiling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> ZendeskConfigBuilder {
        ZendeskConfig::builder()
            .account_url(AccountUrl::new("https://company.zendesk.com").unwrap())
            .username(Username::new("agent@example.com").unwrap())
            .password(Password::new("hunter2").unwrap())
    }

    #[test]
    fn test_build_with_defaults() {
        let config = base_builder().build().unwrap();
        assert_eq!(config.account_url().as_ref(), "https://company.zendesk.com");
        assert_eq!(config.page_ceiling(), DEFAULT_PAGE_CEILING);
    }

    #[test]
    fn test_build_with_ceiling_override() {
        let config = base_builder().page_ceiling(2).build().unwrap();
        assert_eq!(config.page_ceiling(), 2);
    }

    #[test]
    fn test_build_rejects_zero_ceiling() {
        assert!(matches!(
            base_builder().page_ceiling(0).build(),
            Err(ConfigError::InvalidPageCeiling { ceiling: 0 })
        ));
    }

    #[test]
    fn test_build_requires_account_url() {
        let result = ZendeskConfig::builder()
            .username(Username::new("agent@example.com").unwrap())
            .password(Password::new("hunter2").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "account_url" })
        ));
    }

    #[test]
    fn test_config_debug_masks_password() {
        let config = base_builder().build().unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
    }
}
