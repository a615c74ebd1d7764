//! Field metadata descriptors for the XML mapping layer.
//!
//! Each model type declares a [`TypeSpec`]: its root element name plus an
//! ordered table of [`FieldSpec`] entries describing how every field maps
//! onto the wire — wire name, element vs. attribute, casing transform,
//! skip-on-write, serialization order, and an alternate name accepted on
//! read. Tables are plain static data built in a registration function
//! ([`super::XmlResource::xml_spec`]); no runtime reflection is involved,
//! and resolution is a pure function of the table.
//!
//! A property-level setting fully replaces the class-level one: a field
//! with its own casing transform ignores the class default entirely, and a
//! field without one inherits the class default unchanged.

use crate::xml::codec::XmlContent;
use crate::xml::errors::XmlError;

/// Casing transform applied to a wire name.
///
/// The transform always applies to the chosen base string: the explicit
/// wire name when one is set, otherwise the logical field name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameStyle {
    /// Use the base string unchanged.
    #[default]
    AsIs,
    /// `requester_id` becomes `requesterId`.
    CamelCase,
    /// `requester_id` becomes `RequesterId`.
    PascalCase,
    /// Lowercase the base string.
    LowerCase,
}

impl NameStyle {
    /// Applies this transform to a base name.
    #[must_use]
    pub fn apply(self, base: &str) -> String {
        match self {
            Self::AsIs => base.to_string(),
            Self::LowerCase => base.to_lowercase(),
            Self::CamelCase => {
                let pascal = pascal_case(base);
                lower_first(&pascal)
            }
            Self::PascalCase => pascal_case(base),
        }
    }
}

fn pascal_case(base: &str) -> String {
    base.split(|c: char| c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .map(upper_first)
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// How a field is represented in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// A child element (the default).
    #[default]
    Element,
    /// An attribute on the parent element.
    Attribute,
    /// A wrapper element containing one child per item.
    List,
}

/// Reads a field's value out of a model as wire content.
///
/// Returning `Ok(None)` omits the field from output entirely.
pub type EncodeFn<T> = fn(&T) -> Result<Option<XmlContent>, XmlError>;

/// Writes wire content into a model field, coercing scalar text as needed.
pub type DecodeFn<T> = fn(&mut T, XmlContent) -> Result<(), XmlError>;

/// The wire mapping for a single model field.
///
/// Constructed with [`FieldSpec::new`] and customized with the builder
/// methods; unset options keep the defaults (wire name = logical name,
/// element representation, class casing transform, order index last).
pub struct FieldSpec<T> {
    pub(crate) field: &'static str,
    pub(crate) name: Option<&'static str>,
    pub(crate) alternate: Option<&'static str>,
    pub(crate) kind: FieldKind,
    pub(crate) item_name: Option<&'static str>,
    pub(crate) style: Option<NameStyle>,
    pub(crate) skip: bool,
    pub(crate) index: u32,
    pub(crate) encode: EncodeFn<T>,
    pub(crate) decode: DecodeFn<T>,
}

impl<T> FieldSpec<T> {
    /// Creates a descriptor for `field` with default settings.
    #[must_use]
    pub fn new(field: &'static str, encode: EncodeFn<T>, decode: DecodeFn<T>) -> Self {
        Self {
            field,
            name: None,
            alternate: None,
            kind: FieldKind::Element,
            item_name: None,
            style: None,
            skip: false,
            index: u32::MAX,
            encode,
            decode,
        }
    }

    /// Sets an explicit wire name, overriding the logical field name.
    #[must_use]
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets a second element name accepted when reading.
    #[must_use]
    pub const fn alternate(mut self, name: &'static str) -> Self {
        self.alternate = Some(name);
        self
    }

    /// Represents this field as an attribute instead of a child element.
    #[must_use]
    pub const fn attribute(mut self) -> Self {
        self.kind = FieldKind::Attribute;
        self
    }

    /// Represents this field as a wrapper element with one child per item.
    #[must_use]
    pub const fn list(mut self) -> Self {
        self.kind = FieldKind::List;
        self
    }

    /// Names each item element of a list field.
    ///
    /// Without this, model items keep their own root name and scalar items
    /// use a `value` tag.
    #[must_use]
    pub const fn item_name(mut self, name: &'static str) -> Self {
        self.item_name = Some(name);
        self
    }

    /// Sets a field-level casing transform, replacing the class default.
    #[must_use]
    pub const fn style(mut self, style: NameStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Excludes this field from serialized output. It still decodes when a
    /// document carries it.
    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Sets the serialization order index; lower indexes serialize first,
    /// unset fields sort last, ties keep declaration order.
    #[must_use]
    pub const fn index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Returns the logical field name.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the wire representation kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns whether the field is excluded from output.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    fn effective_name(&self, class_style: NameStyle) -> String {
        let base = self.name.unwrap_or(self.field);
        self.style.unwrap_or(class_style).apply(base)
    }
}

impl<T> std::fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("field", &self.field)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("skip", &self.skip)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// The complete wire mapping for a model type.
#[derive(Debug)]
pub struct TypeSpec<T> {
    pub(crate) type_name: &'static str,
    pub(crate) root: Option<&'static str>,
    pub(crate) style: NameStyle,
    pub(crate) fields: Vec<FieldSpec<T>>,
}

/// A field descriptor with its wire name fully resolved.
#[derive(Debug)]
pub struct ResolvedField<'a, T> {
    /// The underlying descriptor.
    pub spec: &'a FieldSpec<T>,
    /// The effective wire name after explicit-name override and casing.
    pub wire_name: String,
}

impl<T> TypeSpec<T> {
    /// Creates a spec for the named type; the root element name defaults to
    /// the type name until overridden with [`TypeSpec::root`].
    #[must_use]
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            root: None,
            style: NameStyle::AsIs,
            fields: Vec::new(),
        }
    }

    /// Sets an explicit root element name.
    #[must_use]
    pub fn root(mut self, root: &'static str) -> Self {
        self.root = Some(root);
        self
    }

    /// Sets the class-level casing transform inherited by fields that do
    /// not declare their own.
    #[must_use]
    pub fn style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    /// Appends a field descriptor. Declaration order is the tie-breaker
    /// for equal order indexes.
    #[must_use]
    pub fn field(mut self, field: FieldSpec<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the type name used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the effective root element name.
    #[must_use]
    pub fn root_name(&self) -> String {
        self.style.apply(self.root.unwrap_or(self.type_name))
    }

    /// Resolves every field to its effective wire name, in serialization
    /// order (ascending index, declaration order on ties).
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::DuplicateWireName`] when two sibling fields
    /// resolve to the same wire name. This is the fail-fast configuration
    /// check: it runs on every codec entry into the type.
    pub fn resolve(&self) -> Result<Vec<ResolvedField<'_, T>>, XmlError> {
        let mut resolved: Vec<ResolvedField<'_, T>> = self
            .fields
            .iter()
            .map(|spec| ResolvedField {
                wire_name: spec.effective_name(self.style),
                spec,
            })
            .collect();

        let mut seen = std::collections::HashSet::new();
        for field in &resolved {
            if !seen.insert(field.wire_name.clone()) {
                return Err(XmlError::DuplicateWireName {
                    type_name: self.type_name,
                    name: field.wire_name.clone(),
                });
            }
        }

        // Stable sort keeps declaration order among equal indexes.
        resolved.sort_by_key(|f| f.spec.index);
        Ok(resolved)
    }

    /// Resolves a single field by its logical name.
    ///
    /// # Errors
    ///
    /// Propagates the duplicate-name configuration check from
    /// [`TypeSpec::resolve`].
    pub fn resolve_field(&self, field: &str) -> Result<Option<ResolvedField<'_, T>>, XmlError> {
        Ok(self.resolve()?.into_iter().find(|f| f.spec.field == field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Probe;

    fn probe_field(name: &'static str) -> FieldSpec<Probe> {
        FieldSpec::new(name, |_| Ok(None), |_, _| Ok(()))
    }

    #[test]
    fn test_name_style_transforms() {
        assert_eq!(NameStyle::AsIs.apply("set_tags"), "set_tags");
        assert_eq!(NameStyle::CamelCase.apply("requester_id"), "requesterId");
        assert_eq!(NameStyle::PascalCase.apply("requester_id"), "RequesterId");
        assert_eq!(NameStyle::LowerCase.apply("Set-Tags"), "set-tags");
    }

    #[test]
    fn test_camel_case_lowers_leading_letter_of_cased_input() {
        assert_eq!(NameStyle::CamelCase.apply("RequesterId"), "requesterId");
        assert_eq!(NameStyle::PascalCase.apply("requesterId"), "RequesterId");
    }

    #[test]
    fn test_default_wire_name_is_logical_name() {
        let spec = TypeSpec::new("Probe").field(probe_field("first"));
        let resolved = spec.resolve().unwrap();
        assert_eq!(resolved[0].wire_name, "first");
    }

    #[test]
    fn test_explicit_name_is_base_for_casing_transform() {
        // Explicit name takes precedence as the base string, and the
        // transform still applies to it.
        let spec = TypeSpec::new("Probe")
            .field(probe_field("first").name("nice_id").style(NameStyle::CamelCase));
        let resolved = spec.resolve().unwrap();
        assert_eq!(resolved[0].wire_name, "niceId");
    }

    #[test]
    fn test_field_style_fully_overrides_class_style() {
        let spec = TypeSpec::new("Probe")
            .style(NameStyle::PascalCase)
            .field(probe_field("first_one"))
            .field(probe_field("second_one").style(NameStyle::AsIs));
        let resolved = spec.resolve().unwrap();
        assert_eq!(resolved[0].wire_name, "FirstOne");
        assert_eq!(resolved[1].wire_name, "second_one");
    }

    #[test]
    fn test_root_name_defaults_to_type_name_with_class_style() {
        let spec: TypeSpec<Probe> = TypeSpec::new("TicketField").style(NameStyle::LowerCase);
        assert_eq!(spec.root_name(), "ticketfield");
        let named: TypeSpec<Probe> = TypeSpec::new("TicketField").root("ticket-field");
        assert_eq!(named.root_name(), "ticket-field");
    }

    #[test]
    fn test_unindexed_fields_sort_last_in_declaration_order() {
        let spec = TypeSpec::new("Probe")
            .field(probe_field("tail_a"))
            .field(probe_field("head").index(0))
            .field(probe_field("tail_b"));
        let order: Vec<&str> = spec
            .resolve()
            .unwrap()
            .iter()
            .map(|f| f.spec.field())
            .collect();
        assert_eq!(order, ["head", "tail_a", "tail_b"]);
    }

    #[test]
    fn test_duplicate_wire_names_fail_fast() {
        let spec = TypeSpec::new("Probe")
            .field(probe_field("first").name("id"))
            .field(probe_field("second").name("id"));
        assert!(matches!(
            spec.resolve(),
            Err(XmlError::DuplicateWireName { type_name: "Probe", .. })
        ));
    }

    #[test]
    fn test_duplicate_check_applies_after_casing() {
        // Two distinct logical names that collide only once the class
        // transform is applied.
        let spec = TypeSpec::new("Probe")
            .style(NameStyle::LowerCase)
            .field(probe_field("Value"))
            .field(probe_field("value"));
        assert!(matches!(
            spec.resolve(),
            Err(XmlError::DuplicateWireName { .. })
        ));
    }

    #[test]
    fn test_resolve_field_finds_single_descriptor() {
        let spec = TypeSpec::new("Probe")
            .field(probe_field("first").name("nice-id"))
            .field(probe_field("second"));
        let field = spec.resolve_field("first").unwrap().unwrap();
        assert_eq!(field.wire_name, "nice-id");
        assert!(spec.resolve_field("missing").unwrap().is_none());
    }
}
