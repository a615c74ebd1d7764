//! Request types for the Zendesk API client.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! constructing requests against the account's REST endpoints.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidRequestError;
use crate::xml::XmlNode;

/// Header instructing the service to act as a specific end user instead of
/// the authenticated account.
pub const ON_BEHALF_OF_HEADER: &str = "X-On-Behalf-Of";

/// HTTP methods used against the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A single-use request to one of the account's resources.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder
/// pattern. The resource path is normalized to carry the `.xml` suffix the
/// classic endpoints expect.
///
/// # Example
///
/// ```rust
/// use zendesk_api::clients::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::builder(HttpMethod::Get, "requests")
///     .query_param("page", "2")
///     .on_behalf_of("end-user@example.com")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.resource, "requests.xml");
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The normalized resource path, e.g. `tickets/123.xml`.
    pub resource: String,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// End-user email for the on-behalf-of header, if any.
    pub on_behalf_of: Option<String>,
    /// The XML body, if any.
    pub body: Option<XmlNode>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, resource: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, resource)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] when a POST or PUT
    /// request has no body.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(self.method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    resource: String,
    query: Option<HashMap<String, String>>,
    on_behalf_of: Option<String>,
    body: Option<XmlNode>,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            query: None,
            on_behalf_of: None,
            body: None,
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the end-user email carried in the on-behalf-of header.
    #[must_use]
    pub fn on_behalf_of(mut self, email: impl Into<String>) -> Self {
        self.on_behalf_of = Some(email.into());
        self
    }

    /// Sets the XML body.
    #[must_use]
    pub fn body(mut self, body: XmlNode) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`ApiRequest`], normalizing the resource path and
    /// validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] for an empty resource path or a
    /// body-less POST/PUT.
    pub fn build(self) -> Result<ApiRequest, InvalidRequestError> {
        let request = ApiRequest {
            method: self.method,
            resource: normalize_resource(&self.resource)?,
            query: self.query,
            on_behalf_of: self.on_behalf_of,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

/// Normalizes a resource path for the classic endpoints.
///
/// Strips leading `/` characters and appends the `.xml` suffix when it is
/// not already present.
fn normalize_resource(resource: &str) -> Result<String, InvalidRequestError> {
    let resource = resource.trim_start_matches('/');
    if resource.is_empty() {
        return Err(InvalidRequestError::EmptyResource);
    }
    if resource.ends_with(".xml") {
        Ok(resource.to_string())
    } else {
        Ok(format!("{resource}.xml"))
    }
}
