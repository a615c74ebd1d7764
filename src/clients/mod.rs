//! HTTP client types for Zendesk API communication.
//!
//! This module provides the request/response adapter between typed
//! operations and the wire: it builds authenticated requests, sends them,
//! and interprets responses into typed results or errors.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ZendeskClient`]: the client holding the immutable account configuration
//! - [`ApiRequest`]: a single-use request, built with [`ApiRequestBuilder`]
//! - [`ApiResponse`]: a raw response with header and body interpretation
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`ClientError`]: the error taxonomy for executing requests
//!
//! # Error behavior
//!
//! - Transport failures propagate unchanged; the client never retries.
//! - 406 and 401 responses raise [`ClientError::Rejected`] carrying the
//!   message extracted from the body's `error` element when possible.
//! - Convenience methods map any other non-2xx status to
//!   [`ClientError::Status`] with no service message attached.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ClientError, InvalidRequestError, GENERIC_REJECTION_MESSAGE};
pub use http_client::{ZendeskClient, SDK_VERSION};
pub use http_request::{ApiRequest, ApiRequestBuilder, HttpMethod, ON_BEHALF_OF_HEADER};
pub use http_response::{ApiResponse, UNKNOWN_ID};
