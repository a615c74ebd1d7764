//! The XML document tree used as the intermediate representation between
//! typed models and wire bytes.
//!
//! [`XmlNode`] is a plain, owned element tree: a name, an ordered attribute
//! list, ordered element children, and optional text content. The codec in
//! [`crate::xml::codec`] builds these trees from models and reads models back
//! out of them; this module handles the tree itself plus the byte boundary
//! (parsing and writing) via `quick-xml` events.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::xml::errors::XmlError;

/// An element in an XML document tree.
///
/// Attribute order and child order are preserved; both matter for the
/// serialized output (sibling elements are emitted in descriptor order).
///
/// # Example
///
/// ```rust
/// use zendesk_api::xml::XmlNode;
///
/// let mut node = XmlNode::new("ticket");
/// node.push_child(XmlNode::with_text("subject", "Printer is on fire"));
/// assert_eq!(node.to_xml(), "<ticket><subject>Printer is on fire</subject></ticket>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// The element name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Element children in document order.
    pub children: Vec<XmlNode>,
    /// Text content, if any. Mixed text fragments are concatenated.
    pub text: Option<String>,
}

impl XmlNode {
    /// Creates an empty element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an element containing only text.
    #[must_use]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Appends an attribute.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns all child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the first element named `name` in a breadth-first walk of the
    /// tree, including this node itself.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        let mut queue = std::collections::VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            if node.name == name {
                return Some(node);
            }
            queue.extend(node.children.iter());
        }
        None
    }

    /// Returns the text content, or an empty string when there is none.
    #[must_use]
    pub fn text_content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Returns a copy of this tree with every attribute removed, recursively.
    ///
    /// The input is untouched; normalization before comparisons or writes
    /// works on the returned tree only.
    #[must_use]
    pub fn strip_attributes(&self) -> XmlNode {
        XmlNode {
            name: self.name.clone(),
            attributes: Vec::new(),
            children: self.children.iter().map(Self::strip_attributes).collect(),
            text: self.text.clone(),
        }
    }

    /// Parses a document from a string and returns its root element.
    ///
    /// Ignores the XML declaration, comments, and processing instructions.
    /// Whitespace-only text between elements is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Malformed`] for unbalanced or unparsable input,
    /// including input with no root element.
    pub fn parse(input: &str) -> Result<XmlNode, XmlError> {
        let mut reader = Reader::from_str(input);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event().map_err(malformed)? {
                Event::Start(start) => {
                    if root.is_some() && stack.is_empty() {
                        break; // content past the root element is ignored
                    }
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    if root.is_some() && stack.is_empty() {
                        break;
                    }
                    let node = element_from_start(&start)?;
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| XmlError::Malformed("unbalanced end tag".into()))?;
                    attach(&mut stack, &mut root, node);
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(malformed)?;
                    append_text(&mut stack, text.trim());
                }
                Event::CData(t) => {
                    let bytes = t.into_inner();
                    let text = String::from_utf8_lossy(&bytes);
                    append_text(&mut stack, &text);
                }
                Event::Eof => break,
                // declarations, comments, processing instructions
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::Malformed("unclosed element".into()));
        }
        root.ok_or_else(|| XmlError::Malformed("no root element".into()))
    }

    /// Serializes this tree to a string, escaping text and attribute values.
    ///
    /// No XML declaration is emitted; the service accepts bare documents.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut writer = Writer::new(Vec::new());
        // Writing to a Vec cannot fail.
        write_node(&mut writer, self);
        String::from_utf8(writer.into_inner()).unwrap_or_default()
    }
}

fn malformed(err: impl std::fmt::Display) -> XmlError {
    XmlError::Malformed(err.to_string())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlNode, XmlError> {
    let mut node = XmlNode::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(malformed)?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(malformed)?.into_owned();
        node.push_attribute(name, value);
    }
    Ok(node)
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

fn append_text(stack: &mut [XmlNode], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(node) = stack.last_mut() {
        node.text.get_or_insert_with(String::new).push_str(text);
    }
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) {
    let mut start = BytesStart::new(node.name.as_str());
    for (name, value) in &node.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    let _ = writer.write_event(Event::Start(start));
    if let Some(text) = &node.text {
        let _ = writer.write_event(Event::Text(BytesText::new(text)));
    }
    for child in &node.children {
        write_node(writer, child);
    }
    let _ = writer.write_event(Event::End(BytesEnd::new(node.name.as_str())));
}
