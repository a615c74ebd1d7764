//! Ticket field definitions.
//!
//! Field definitions describe the custom fields available on tickets; the
//! values themselves travel as
//! [`crate::resources::TicketFieldEntry`] entries on each ticket.

use serde::{Deserialize, Serialize};

use crate::clients::{ClientError, ZendeskClient};
use crate::xml::{scalar, FieldSpec, TypeSpec, XmlContent, XmlResource};

/// A custom ticket field definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TicketField {
    /// The field id, referenced by ticket field entries.
    pub id: i64,
    /// Display title.
    pub title: Option<String>,
    /// The field type, e.g. `text` or `checkbox`.
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    /// Whether agents must fill the field before solving.
    pub is_required: bool,
}

impl XmlResource for TicketField {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("TicketField")
            .root("ticket-field")
            .field(FieldSpec::new(
                "id",
                |f: &TicketField| Ok(Some(XmlContent::Text(f.id.to_string()))),
                |f, c| {
                    f.id = scalar::parse_i64(c.text()?)?;
                    Ok(())
                },
            ))
            .field(FieldSpec::new(
                "title",
                |f: &TicketField| Ok(f.title.clone().map(XmlContent::Text)),
                |f, c| {
                    f.title = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "field_type",
                    |f: &TicketField| Ok(f.field_type.clone().map(XmlContent::Text)),
                    |f, c| {
                        f.field_type = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("type"),
            )
            .field(
                FieldSpec::new(
                    "is_required",
                    |f: &TicketField| {
                        Ok(Some(XmlContent::Text(scalar::format_bool(f.is_required))))
                    },
                    |f, c| {
                        f.is_required = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-required"),
            )
    }
}

impl ZendeskClient {
    /// Fetches the account's custom ticket field definitions.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors for undecodable items.
    pub async fn ticket_fields(&self) -> Result<Vec<TicketField>, ClientError> {
        self.collection("ticket_fields", None).await
    }
}
