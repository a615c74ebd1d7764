//! View resources.
//!
//! Views are saved ticket filters ("rules" on the wire); the tickets a
//! view matches are listed through [`crate::ZendeskClient::tickets_in_view_page`].

use serde::{Deserialize, Serialize};

use crate::clients::{ClientError, ZendeskClient};
use crate::xml::{scalar, FieldSpec, TypeSpec, XmlContent, XmlResource};

/// A saved ticket view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct View {
    /// The view id, used to list its tickets.
    pub id: i64,
    /// Display title.
    pub title: Option<String>,
    /// Whether the view is active.
    pub is_active: bool,
}

impl XmlResource for View {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("View")
            .root("view")
            .field(FieldSpec::new(
                "id",
                |v: &View| Ok(Some(XmlContent::Text(v.id.to_string()))),
                |v, c| {
                    v.id = scalar::parse_i64(c.text()?)?;
                    Ok(())
                },
            ))
            .field(FieldSpec::new(
                "title",
                |v: &View| Ok(v.title.clone().map(XmlContent::Text)),
                |v, c| {
                    v.title = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "is_active",
                    |v: &View| Ok(Some(XmlContent::Text(scalar::format_bool(v.is_active)))),
                    |v, c| {
                        v.is_active = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-active"),
            )
    }
}

impl ZendeskClient {
    /// Fetches every view on the account.
    ///
    /// The response nests the collection under a `views` element.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors for undecodable items.
    pub async fn views(&self) -> Result<Vec<View>, ClientError> {
        self.collection("views", Some("views")).await
    }

    /// Fetches the view with the given title, if one exists.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ZendeskClient::views`].
    pub async fn view_by_name(&self, name: &str) -> Result<Option<View>, ClientError> {
        let views = self.views().await?;
        Ok(views.into_iter().find(|v| v.title.as_deref() == Some(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    #[test]
    fn test_view_decodes_from_wire() {
        let view: View = xml::from_xml(
            "<view><id>5</id><title>Unassigned</title><is-active>true</is-active></view>",
        )
        .unwrap();
        assert_eq!(view.id, 5);
        assert_eq!(view.title.as_deref(), Some("Unassigned"));
        assert!(view.is_active);
    }
}
