//! Response types for the Zendesk API client.
//!
//! This module provides the [`ApiResponse`] type plus the header and body
//! interpretation the convenience methods rely on: created-id extraction
//! from the `Location` header and error-message extraction from rejection
//! bodies.

use std::collections::HashMap;

use crate::xml::XmlNode;

/// Sentinel returned by [`ApiResponse::created_id`] when the `Location`
/// header is absent or unparsable. Not an error, merely "unknown id".
pub const UNKNOWN_ID: i64 = -1;

/// A raw response from the service.
///
/// Header names are lowercased; a header may carry multiple values. The
/// body is kept as text because the decode path is chosen later, from the
/// `Content-Type`.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response from parts.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header (lowercase), if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns `true` when the response declares a JSON body.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map_or(false, |ct| ct.contains("json"))
    }

    /// Extracts the created resource's id from the `Location` header.
    ///
    /// Create responses carry a header like
    /// `Location: https://company.zendesk.com/tickets/482-some-slug.xml`;
    /// the id is the leading number of the final path segment, before the
    /// first hyphen. Returns [`UNKNOWN_ID`] when the header is absent or
    /// the segment does not start with a number.
    #[must_use]
    pub fn created_id(&self) -> i64 {
        self.header("location")
            .and_then(|location| location.split('/').next_back())
            .map(|segment| segment.trim_end_matches(".xml"))
            .and_then(|segment| segment.split('-').next())
            .and_then(|id| id.parse().ok())
            .unwrap_or(UNKNOWN_ID)
    }

    /// Extracts the human-readable message from a rejection body.
    ///
    /// Looks for an `error` element (the root itself, or any descendant)
    /// and returns its text. Returns `None` when the body is not XML or
    /// carries no such element.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let root = XmlNode::parse(&self.body).ok()?;
        let error = root.find("error")?;
        let text = error.text_content();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
