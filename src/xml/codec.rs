//! Descriptor-driven conversion between models and XML document trees.
//!
//! [`to_node`] walks a type's resolved descriptor table in serialization
//! order and builds an [`XmlNode`] tree; [`from_node`] walks the same table
//! against a parsed tree and fills in a default-constructed model. Both
//! directions run the duplicate-wire-name configuration check first, so a
//! misconfigured table fails on its first use in either direction.

use crate::xml::descriptor::{FieldKind, TypeSpec};
use crate::xml::errors::XmlError;
use crate::xml::node::XmlNode;

/// Default tag for items of a list field whose items carry no name of
/// their own and whose descriptor sets none.
const DEFAULT_ITEM_TAG: &str = "value";

/// A model type with a declared XML mapping.
///
/// Implementations return a freshly built [`TypeSpec`] from a plain
/// registration function. The table must be a pure function of the type:
/// building it twice yields the same mapping, so the codec is free to call
/// it per conversion without coordination.
pub trait XmlResource: Default {
    /// Returns the descriptor table for this type.
    fn xml_spec() -> TypeSpec<Self>;
}

/// Wire content exchanged between the codec and a field's encode/decode
/// functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    /// Scalar text, already in canonical wire form.
    Text(String),
    /// An element subtree (nested model, or the element a scalar reads
    /// its text from).
    Node(XmlNode),
    /// The item elements of a list field, in document order.
    Items(Vec<XmlNode>),
}

impl XmlContent {
    /// Returns the scalar text of this content.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::UnexpectedContent`] for list content.
    pub fn text(&self) -> Result<&str, XmlError> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Node(n) => Ok(n.text_content()),
            Self::Items(_) => Err(XmlError::UnexpectedContent(
                "expected scalar text, found a list",
            )),
        }
    }

    /// Returns the element subtree of this content.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::UnexpectedContent`] for non-element content.
    pub fn node(&self) -> Result<&XmlNode, XmlError> {
        match self {
            Self::Node(n) => Ok(n),
            _ => Err(XmlError::UnexpectedContent("expected a nested element")),
        }
    }

    /// Returns the item elements of this content.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::UnexpectedContent`] for non-list content.
    pub fn items(&self) -> Result<&[XmlNode], XmlError> {
        match self {
            Self::Items(items) => Ok(items),
            _ => Err(XmlError::UnexpectedContent("expected list items")),
        }
    }
}

/// Serializes a model into a document tree rooted at its class-level wire
/// name.
///
/// Fields are emitted in ascending order index (declaration order on
/// ties); skipped fields never appear; fields whose encode function
/// returns `None` are omitted.
///
/// # Errors
///
/// Returns [`XmlError::DuplicateWireName`] for a misconfigured descriptor
/// table, or whatever a field's encode function raises.
pub fn to_node<T: XmlResource>(value: &T) -> Result<XmlNode, XmlError> {
    let spec = T::xml_spec();
    let fields = spec.resolve()?;
    let mut root = XmlNode::new(spec.root_name());

    for field in fields {
        if field.spec.is_skipped() {
            continue;
        }
        let Some(content) = (field.spec.encode)(value).map_err(|e| e.in_field(field.spec.field()))?
        else {
            continue;
        };
        match (field.spec.kind(), content) {
            (FieldKind::Attribute, XmlContent::Text(text)) => {
                root.push_attribute(field.wire_name, text);
            }
            (FieldKind::Attribute, _) => {
                return Err(XmlError::UnexpectedContent(
                    "attribute fields must encode scalar text",
                )
                .in_field(field.spec.field()));
            }
            (FieldKind::Element, XmlContent::Text(text)) => {
                root.push_child(XmlNode::with_text(field.wire_name, text));
            }
            (FieldKind::Element, XmlContent::Node(mut node)) => {
                // A nested model is named by the field, not by its own root.
                node.name = field.wire_name;
                root.push_child(node);
            }
            (FieldKind::List, XmlContent::Items(items)) => {
                let mut wrapper = XmlNode::new(field.wire_name);
                for mut item in items {
                    if let Some(tag) = field.spec.item_name {
                        item.name = tag.to_string();
                    } else if item.name.is_empty() {
                        item.name = DEFAULT_ITEM_TAG.to_string();
                    }
                    wrapper.push_child(item);
                }
                root.push_child(wrapper);
            }
            (FieldKind::Element | FieldKind::List, _) => {
                return Err(XmlError::UnexpectedContent(
                    "field content does not match its declared kind",
                )
                .in_field(field.spec.field()));
            }
        }
    }

    Ok(root)
}

/// Serializes a model straight to an XML string.
///
/// # Errors
///
/// Propagates [`to_node`] errors.
pub fn to_xml<T: XmlResource>(value: &T) -> Result<String, XmlError> {
    Ok(to_node(value)?.to_xml())
}

/// Deserializes a model from a document tree.
///
/// The node's own name is not checked — the service is inconsistent about
/// root names, and list decoding already selects the right subtree. Each
/// field looks itself up by primary wire name, falling back to the
/// alternate read name; missing fields keep the type's default value.
///
/// # Errors
///
/// Returns [`XmlError::DuplicateWireName`] for a misconfigured table, or a
/// field-tagged decode error when present content fails coercion.
pub fn from_node<T: XmlResource>(node: &XmlNode) -> Result<T, XmlError> {
    let spec = T::xml_spec();
    let fields = spec.resolve()?;
    let mut value = T::default();

    for field in fields {
        let content = match field.spec.kind() {
            FieldKind::Attribute => lookup_attribute(node, &field.wire_name, field.spec.alternate)
                .map(|text| XmlContent::Text(text.to_string())),
            FieldKind::Element => lookup_child(node, &field.wire_name, field.spec.alternate)
                .map(|child| XmlContent::Node(child.clone())),
            FieldKind::List => {
                lookup_child(node, &field.wire_name, field.spec.alternate).map(|wrapper| {
                    let items = wrapper
                        .children
                        .iter()
                        .filter(|c| field.spec.item_name.map_or(true, |tag| c.name == tag))
                        .cloned()
                        .collect();
                    XmlContent::Items(items)
                })
            }
        };
        if let Some(content) = content {
            (field.spec.decode)(&mut value, content)
                .map_err(|e| e.in_field(field.spec.field()))?;
        }
    }

    Ok(value)
}

/// Parses an XML string and deserializes a model from its root element.
///
/// # Errors
///
/// Returns [`XmlError::Malformed`] for unparsable input, otherwise
/// propagates [`from_node`] errors.
pub fn from_xml<T: XmlResource>(input: &str) -> Result<T, XmlError> {
    from_node(&XmlNode::parse(input)?)
}

fn lookup_attribute<'a>(
    node: &'a XmlNode,
    name: &str,
    alternate: Option<&'static str>,
) -> Option<&'a str> {
    node.attribute(name)
        .or_else(|| alternate.and_then(|alt| node.attribute(alt)))
}

fn lookup_child<'a>(
    node: &'a XmlNode,
    name: &str,
    alternate: Option<&'static str>,
) -> Option<&'a XmlNode> {
    node.child(name)
        .or_else(|| alternate.and_then(|alt| node.child(alt)))
}
