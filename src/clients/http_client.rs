//! HTTP client for Zendesk API communication.
//!
//! This module provides the [`ZendeskClient`] type for making
//! basic-authenticated requests against a Zendesk account and interpreting
//! the responses.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{ClientError, GENERIC_REJECTION_MESSAGE};
use crate::clients::http_request::{ApiRequest, HttpMethod, ON_BEHALF_OF_HEADER};
use crate::clients::http_response::ApiResponse;
use crate::config::ZendeskConfig;
use crate::resources::Page;
use crate::xml::{self, XmlNode, XmlResource};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for a single Zendesk account.
///
/// The client is an immutable value: the configuration (base URL,
/// credentials, pagination ceiling) is injected at construction and never
/// changes. Each operation issues its HTTP round trips sequentially and
/// returns when they complete; there is no background work and no state
/// shared between calls.
///
/// # Thread Safety
///
/// `ZendeskClient` is `Send + Sync`, making it safe to share across async
/// tasks. Callers needing parallelism run independent operations from
/// their own concurrency layer.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_api::{AccountUrl, Password, Username, ZendeskClient, ZendeskConfig};
///
/// let config = ZendeskConfig::builder()
///     .account_url(AccountUrl::new("https://company.zendesk.com")?)
///     .username(Username::new("agent@example.com")?)
///     .password(Password::new("hunter2")?)
///     .build()?;
///
/// let client = ZendeskClient::new(config);
/// let ticket = client.ticket(123).await?;
/// ```
#[derive(Debug)]
pub struct ZendeskClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Immutable account configuration.
    config: ZendeskConfig,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ZendeskClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZendeskClient>();
};

impl ZendeskClient {
    /// Creates a new client for the given account configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: ZendeskConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Zendesk API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/xml, application/json".to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            default_headers,
        }
    }

    /// Returns the account configuration.
    #[must_use]
    pub const fn config(&self) -> &ZendeskConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the raw response.
    ///
    /// Statuses indicating rejected input or failed authentication
    /// (406, 401) raise [`ClientError::Rejected`] carrying the message
    /// extracted from the body's `error` element, or a generic fallback.
    /// All other statuses are returned to the caller for interpretation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] for transport failures (never
    /// retried) and [`ClientError::Rejected`] as described above.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/{}", self.config.account_url(), request.resource);
        tracing::debug!(method = %request.method, %url, "dispatching request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        builder = builder.basic_auth(
            self.config.username().as_ref(),
            Some(self.config.password().as_ref()),
        );
        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }
        if let Some(email) = &request.on_behalf_of {
            builder = builder.header(ON_BEHALF_OF_HEADER, email);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/xml")
                .body(body.to_xml());
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();
        let response = ApiResponse::new(code, headers, body);

        if code == 406 || code == 401 {
            let message = response
                .error_message()
                .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string());
            tracing::warn!(code, %message, "request rejected by Zendesk");
            return Err(ClientError::Rejected { message });
        }

        Ok(response)
    }

    /// Sends a request and decodes the body into a single typed resource.
    ///
    /// The decode path follows the response `Content-Type`: JSON bodies go
    /// through serde, everything else through the XML codec.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses, and decode
    /// errors when the body does not map to `T`.
    pub async fn execute_typed<T>(&self, request: ApiRequest) -> Result<T, ClientError>
    where
        T: XmlResource + DeserializeOwned,
    {
        let resource = request.resource.clone();
        let response = self.execute(request).await?;
        if !response.is_ok() {
            return Err(ClientError::Status {
                code: response.code,
                resource,
            });
        }
        Self::decode_typed(&response)
    }

    /// Fetches one page of a listed resource.
    ///
    /// Absence of further data is a normal outcome, not an error: a 404
    /// status or an empty body yields [`Page::End`]. Anything the service
    /// actually returned is decoded, and decode failures propagate.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for other non-2xx responses and
    /// decode errors for undecodable pages.
    pub async fn fetch_page<T>(&self, request: ApiRequest) -> Result<Page<T>, ClientError>
    where
        T: XmlResource + DeserializeOwned,
    {
        let resource = request.resource.clone();
        let response = self.execute(request).await?;
        if response.code == 404 {
            return Ok(Page::End);
        }
        if !response.is_ok() {
            return Err(ClientError::Status {
                code: response.code,
                resource,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(Page::End);
        }
        Ok(Page::Items(Self::decode_collection(&response, None)?))
    }

    /// Fetches a whole collection resource in one request.
    ///
    /// When `root_element` is given, decoding starts from that element of
    /// the response document instead of the document root; some endpoints
    /// nest their collections.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors when items do not map to `T`.
    pub async fn collection<T>(
        &self,
        resource: &str,
        root_element: Option<&str>,
    ) -> Result<Vec<T>, ClientError>
    where
        T: XmlResource + DeserializeOwned,
    {
        let request = ApiRequest::builder(HttpMethod::Get, resource).build()?;
        let path = request.resource.clone();
        let response = self.execute(request).await?;
        if !response.is_ok() {
            return Err(ClientError::Status {
                code: response.code,
                resource: path,
            });
        }
        Self::decode_collection(&response, root_element)
    }

    /// Executes a create request and extracts the new resource's id from
    /// the `Location` header, with the unknown-id sentinel on a missing or
    /// unparsable header.
    pub(crate) async fn execute_created_id(&self, request: ApiRequest) -> Result<i64, ClientError> {
        let resource = request.resource.clone();
        let response = self.execute(request).await?;
        if !response.is_ok() {
            return Err(ClientError::Status {
                code: response.code,
                resource,
            });
        }
        Ok(response.created_id())
    }

    /// Executes a request whose only interesting outcome is success.
    pub(crate) async fn execute_expect_ok(&self, request: ApiRequest) -> Result<(), ClientError> {
        let resource = request.resource.clone();
        let response = self.execute(request).await?;
        if response.is_ok() {
            Ok(())
        } else {
            Err(ClientError::Status {
                code: response.code,
                resource,
            })
        }
    }

    /// Decodes a single resource, dispatching on the response content type.
    fn decode_typed<T>(response: &ApiResponse) -> Result<T, ClientError>
    where
        T: XmlResource + DeserializeOwned,
    {
        if response.is_json() {
            Ok(serde_json::from_str(&response.body)?)
        } else {
            Ok(xml::from_xml(&response.body)?)
        }
    }

    /// Decodes a collection, dispatching on the response content type.
    fn decode_collection<T>(
        response: &ApiResponse,
        root_element: Option<&str>,
    ) -> Result<Vec<T>, ClientError>
    where
        T: XmlResource + DeserializeOwned,
    {
        if response.is_json() {
            return Ok(serde_json::from_str(&response.body)?);
        }
        let root = XmlNode::parse(&response.body)?;
        let list = root_element
            .and_then(|name| root.find(name))
            .unwrap_or(&root);
        let items = list
            .children
            .iter()
            .map(xml::from_node)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(items)
    }

    /// Parses response headers into a map keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountUrl, Password, Username};

    fn create_test_config() -> ZendeskConfig {
        ZendeskConfig::builder()
            .account_url(AccountUrl::new("https://test.zendesk.com").unwrap())
            .username(Username::new("agent@example.com").unwrap())
            .password(Password::new("test-password").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_keeps_config() {
        let client = ZendeskClient::new(create_test_config());
        assert_eq!(
            client.config().account_url().as_ref(),
            "https://test.zendesk.com"
        );
        assert_eq!(client.config().page_ceiling(), 25);
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = ZendeskClient::new(create_test_config());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Zendesk API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_accept_header_covers_both_wire_formats() {
        let client = ZendeskClient::new(create_test_config());
        let accept = client.default_headers().get("Accept").unwrap();
        assert!(accept.contains("application/xml"));
        assert!(accept.contains("application/json"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ZendeskClient>();
    }
}
