//! Error types for the HTTP client layer.

use thiserror::Error;

use crate::xml::XmlError;

/// Fallback message when a rejection body carries no parsable `error`
/// element. Wording matches what callers of the original client saw.
pub const GENERIC_REJECTION_MESSAGE: &str = "Zendesk could not handle the input you gave it";

/// Errors raised when building or executing an API request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service rejected the input or the credentials (HTTP 406/401).
    ///
    /// Carries the message extracted from the response body's `error`
    /// element, or [`GENERIC_REJECTION_MESSAGE`] when extraction fails.
    #[error("Zendesk rejected the request: {message}")]
    Rejected {
        /// Best-effort human-readable reason from the service.
        message: String,
    },

    /// A convenience method expected success and got something else.
    ///
    /// No service message is attached; the status code is all the service
    /// gave us.
    #[error("unexpected status {code} from {resource}")]
    Status {
        /// The HTTP status code received.
        code: u16,
        /// The resource path that was requested.
        resource: String,
    },

    /// A transport-level failure (connection, TLS, timeout). Propagated
    /// unchanged; the client never retries.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The response body could not be mapped to the expected type.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A JSON response body could not be mapped to the expected type.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A ticket's requester could not be resolved to an email address for
    /// an on-behalf-of operation.
    #[error("requester for ticket {ticket_id} has no email address")]
    MissingRequesterEmail {
        /// The ticket whose requester lacks an email.
        ticket_id: i64,
    },

    /// The request was malformed before it was ever sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

/// Validation errors for [`crate::clients::ApiRequest`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// POST and PUT requests must carry a body.
    #[error("{method} requests require a body")]
    MissingBody {
        /// The offending HTTP method.
        method: String,
    },

    /// The resource path was empty after normalization.
    #[error("resource path cannot be empty")]
    EmptyResource,
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientError>();
    assert_send_sync::<InvalidRequestError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error_carries_service_message() {
        let error = ClientError::Rejected {
            message: "Bad thing".to_string(),
        };
        assert!(error.to_string().contains("Bad thing"));
    }

    #[test]
    fn test_status_error_names_resource() {
        let error = ClientError::Status {
            code: 500,
            resource: "tickets/1.xml".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("tickets/1.xml"));
    }

    #[test]
    fn test_xml_error_converts() {
        let error: ClientError = XmlError::Malformed("broken".to_string()).into();
        assert!(matches!(error, ClientError::Xml(_)));
    }

    #[test]
    fn test_invalid_request_converts() {
        let error: ClientError = InvalidRequestError::EmptyResource.into();
        assert!(matches!(error, ClientError::InvalidRequest(_)));
    }
}
