//! Error types for the XML mapping layer.

use thiserror::Error;

/// Errors raised while resolving field metadata or converting between
/// models and XML documents.
///
/// Metadata problems (`DuplicateWireName`) are configuration errors: they
/// depend only on a type's descriptor table and surface on the first
/// serialize or deserialize of that type. Everything else is data-dependent.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Two sibling fields resolved to the same wire name.
    #[error("duplicate wire name `{name}` in descriptor table for `{type_name}`")]
    DuplicateWireName {
        /// The model type whose table is misconfigured.
        type_name: &'static str,
        /// The colliding effective wire name.
        name: String,
    },

    /// The input could not be parsed as XML at all.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// A scalar value did not parse as the expected type.
    #[error("cannot parse `{value}` as {expected}")]
    Scalar {
        /// The offending text.
        value: String,
        /// What the field expected, e.g. "boolean".
        expected: &'static str,
    },

    /// The document shape did not match the field descriptor, e.g. a nested
    /// element where an attribute was declared.
    #[error("unexpected content: {0}")]
    UnexpectedContent(&'static str),

    /// A field failed to decode; wraps the underlying error with the
    /// logical field name for context.
    #[error("field `{field}`: {source}")]
    Field {
        /// The logical field name from the descriptor table.
        field: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<XmlError>,
    },
}

impl XmlError {
    /// Wraps this error with the logical field name it occurred on.
    #[must_use]
    pub fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }
}

// Verify XmlError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<XmlError>();
};
