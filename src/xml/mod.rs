//! The attribute-driven XML mapping layer.
//!
//! This is the core of the crate: models declare a per-type descriptor
//! table ([`TypeSpec`]) mapping fields to wire names, and the codec
//! converts instances to and from [`XmlNode`] document trees using that
//! table alone.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`XmlNode`]: the owned document tree, with parsing and writing
//! - [`TypeSpec`] / [`FieldSpec`]: the per-type field descriptor table
//! - [`NameStyle`] / [`FieldKind`]: casing transforms and wire kinds
//! - [`XmlResource`]: trait connecting a model to its table
//! - [`to_node`] / [`from_node`] (and the string forms [`to_xml`] /
//!   [`from_xml`]): the codec itself
//! - [`scalar`]: canonical scalar formatting and tolerant parsing
//! - [`XmlError`]: configuration and decode errors
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::xml::{self, FieldSpec, TypeSpec, XmlContent, XmlResource};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tag {
//!     label: Option<String>,
//! }
//!
//! impl XmlResource for Tag {
//!     fn xml_spec() -> TypeSpec<Self> {
//!         TypeSpec::new("Tag").root("tag").field(FieldSpec::new(
//!             "label",
//!             |t: &Tag| Ok(t.label.clone().map(XmlContent::Text)),
//!             |t, c| {
//!                 t.label = Some(c.text()?.to_string());
//!                 Ok(())
//!             },
//!         ))
//!     }
//! }
//!
//! let tag = Tag { label: Some("urgent".to_string()) };
//! let xml = xml::to_xml(&tag).unwrap();
//! assert_eq!(xml, "<tag><label>urgent</label></tag>");
//! assert_eq!(xml::from_xml::<Tag>(&xml).unwrap(), tag);
//! ```

mod codec;
mod descriptor;
mod errors;
mod node;
pub mod scalar;

pub use codec::{from_node, from_xml, to_node, to_xml, XmlContent, XmlResource};
pub use descriptor::{FieldKind, FieldSpec, NameStyle, ResolvedField, TypeSpec};
pub use errors::XmlError;
pub use node::XmlNode;
