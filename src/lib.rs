//! # Zendesk API Rust client
//!
//! A Rust client for the Zendesk classic helpdesk API, providing typed
//! CRUD-style operations over HTTP for tickets, users, organizations,
//! views, and ticket fields.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ZendeskConfig`] and [`ZendeskConfigBuilder`]
//! - Validated newtypes for the account URL and basic-auth credentials
//! - A descriptor-driven XML codec mapping models onto the service's wire
//!   names via [`xml`]
//! - Typed resource operations on [`ZendeskClient`], including paginated
//!   listing with an explicit end-of-data signal ([`Page`])
//! - Created-id extraction from `Location` headers and service error
//!   extraction from rejection bodies
//! - Signed remote-authentication login URLs via [`sso`]
//!
//! ## Quick Start
//!
//! ```rust
//! use zendesk_api::{AccountUrl, Password, Username, ZendeskConfig};
//!
//! // Create configuration using the builder pattern
//! let config = ZendeskConfig::builder()
//!     .account_url(AccountUrl::new("https://company.zendesk.com").unwrap())
//!     .username(Username::new("agent@example.com").unwrap())
//!     .password(Password::new("your-password").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use zendesk_api::{Ticket, TicketPriority, ZendeskClient};
//!
//! let client = ZendeskClient::new(config);
//!
//! // Fetch one ticket
//! let ticket = client.ticket(482).await?;
//! println!("{}", ticket.subject.unwrap_or_default());
//!
//! // Create a ticket
//! let new_ticket = Ticket {
//!     subject: Some("Printer on fire".to_string()),
//!     description: Some("It started smoking".to_string()),
//!     priority_id: TicketPriority::Urgent.id(),
//!     requester_id: Some(91),
//!     ..Ticket::default()
//! };
//! let id = client.create_ticket(&new_ticket).await?;
//!
//! // Everything an end user requested, across pages
//! let tickets = client.all_tickets_for_user("end-user@example.com").await?;
//! ```
//!
//! ## Single Sign-On
//!
//! ```rust
//! use zendesk_api::sso;
//!
//! let url = sso::login_url(
//!     "account-sso-token",
//!     "https://company.zendesk.com",
//!     "John Doe",
//!     "john@example.com",
//!     None,
//! );
//! assert!(url.contains("/access/remote/?name=John%20Doe"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is an immutable value injected
//!   into the client
//! - **Fail-fast validation**: configuration newtypes validate on
//!   construction, and a misconfigured descriptor table errors on its
//!   first use
//! - **Sequential requests**: each operation awaits its round trips one
//!   at a time; callers bring their own concurrency if they need it
//! - **Explicit end-of-data**: pagination stops on a [`Page::End`]
//!   variant, never by catching an error

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod sso;
pub mod xml;

// Re-export public types at crate root for convenience
pub use config::{
    AccountUrl, Password, Username, ZendeskConfig, ZendeskConfigBuilder, DEFAULT_PAGE_CEILING,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiRequest, ApiRequestBuilder, ApiResponse, ClientError, HttpMethod, InvalidRequestError,
    ZendeskClient, GENERIC_REJECTION_MESSAGE, ON_BEHALF_OF_HEADER, UNKNOWN_ID,
};

// Re-export resource types for convenience
pub use resources::{
    fetch_all_pages, Comment, Organization, Page, Ticket, TicketField, TicketFieldEntry,
    TicketPriority, User, UserEmailIdentity, View,
};
