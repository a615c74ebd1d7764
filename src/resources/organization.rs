//! Organization resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiRequest, ClientError, HttpMethod, ZendeskClient};
use crate::resources::User;
use crate::xml::{self, scalar, FieldSpec, TypeSpec, XmlContent, XmlResource};

const ORGANIZATIONS: &str = "organizations";

/// An organization grouping end users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Organization {
    /// The organization id.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
    /// Whether tickets are shared among the organization's users.
    pub is_shared: bool,
    /// The default set on the organization, as text.
    pub default: Option<String>,
    /// The organization's users, when the endpoint includes them.
    pub users: Vec<User>,
    /// Tags to set, space separated.
    pub set_tags: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Group the organization maps to, if any.
    pub group_id: Option<i64>,
    /// Whether comments are shared among the organization's users.
    pub is_shared_comments: bool,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether the organization is suspended.
    #[serde(rename = "suspended")]
    pub is_suspended: bool,
    /// Last update time. Read-only.
    pub updated_at: Option<DateTime<Utc>>,
    /// Tags currently set. Read-only.
    pub current_tags: Option<String>,
}

impl XmlResource for Organization {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("Organization")
            .root("organization")
            .field(FieldSpec::new(
                "id",
                |o: &Organization| Ok(Some(XmlContent::Text(o.id.to_string()))),
                |o, c| {
                    o.id = scalar::parse_i64(c.text()?)?;
                    Ok(())
                },
            ))
            .field(FieldSpec::new(
                "name",
                |o: &Organization| Ok(o.name.clone().map(XmlContent::Text)),
                |o, c| {
                    o.name = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "is_shared",
                    |o: &Organization| {
                        Ok(Some(XmlContent::Text(scalar::format_bool(o.is_shared))))
                    },
                    |o, c| {
                        o.is_shared = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-shared"),
            )
            .field(FieldSpec::new(
                "default",
                |o: &Organization| Ok(o.default.clone().map(XmlContent::Text)),
                |o, c| {
                    o.default = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "users",
                    |o: &Organization| {
                        if o.users.is_empty() {
                            return Ok(None);
                        }
                        Ok(Some(XmlContent::Items(
                            o.users.iter().map(xml::to_node).collect::<Result<_, _>>()?,
                        )))
                    },
                    |o, c| {
                        o.users = c
                            .items()?
                            .iter()
                            .map(xml::from_node)
                            .collect::<Result<_, _>>()?;
                        Ok(())
                    },
                )
                .list(),
            )
            .field(
                FieldSpec::new(
                    "set_tags",
                    |o: &Organization| Ok(o.set_tags.clone().map(XmlContent::Text)),
                    |o, c| {
                        o.set_tags = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("set-tags"),
            )
            .field(
                FieldSpec::new(
                    "created_at",
                    |o: &Organization| {
                        Ok(o.created_at
                            .as_ref()
                            .map(|d| XmlContent::Text(scalar::format_datetime(d))))
                    },
                    |o, c| {
                        o.created_at = Some(scalar::parse_datetime(c.text()?)?);
                        Ok(())
                    },
                )
                .name("created-at"),
            )
            .field(
                FieldSpec::new(
                    "group_id",
                    |o: &Organization| Ok(o.group_id.map(|v| XmlContent::Text(v.to_string()))),
                    |o, c| {
                        o.group_id = Some(scalar::parse_i64(c.text()?)?);
                        Ok(())
                    },
                )
                .name("group-id"),
            )
            .field(
                FieldSpec::new(
                    "is_shared_comments",
                    |o: &Organization| {
                        Ok(Some(XmlContent::Text(scalar::format_bool(
                            o.is_shared_comments,
                        ))))
                    },
                    |o, c| {
                        o.is_shared_comments = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-shared-comments"),
            )
            .field(FieldSpec::new(
                "notes",
                |o: &Organization| Ok(o.notes.clone().map(XmlContent::Text)),
                |o, c| {
                    o.notes = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "is_suspended",
                    |o: &Organization| {
                        Ok(Some(XmlContent::Text(scalar::format_bool(o.is_suspended))))
                    },
                    |o, c| {
                        o.is_suspended = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("suspended"),
            )
            .field(
                FieldSpec::new(
                    "updated_at",
                    |o: &Organization| {
                        Ok(o.updated_at
                            .as_ref()
                            .map(|d| XmlContent::Text(scalar::format_datetime(d))))
                    },
                    |o, c| {
                        o.updated_at = Some(scalar::parse_datetime(c.text()?)?);
                        Ok(())
                    },
                )
                .name("updated-at")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "current_tags",
                    |o: &Organization| Ok(o.current_tags.clone().map(XmlContent::Text)),
                    |o, c| {
                        o.current_tags = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("current-tags")
                .skip(),
            )
    }
}

impl ZendeskClient {
    /// Fetches a single organization by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors when the body does not map to an organization.
    pub async fn organization(&self, id: i64) -> Result<Organization, ClientError> {
        let request =
            ApiRequest::builder(HttpMethod::Get, format!("{ORGANIZATIONS}/{id}")).build()?;
        self.execute_typed(request).await
    }

    /// Fetches every organization on the account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors for undecodable items.
    pub async fn organizations(&self) -> Result<Vec<Organization>, ClientError> {
        self.collection(ORGANIZATIONS, Some("organizations")).await
    }

    /// Creates an organization and returns its id from the `Location`
    /// header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the service refuses the
    /// input and [`ClientError::Status`] for other failures.
    pub async fn create_organization(
        &self,
        organization: &Organization,
    ) -> Result<i64, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Post, ORGANIZATIONS)
            .body(xml::to_node(organization)?)
            .build()?;
        self.execute_created_id(request).await
    }

    /// Updates an organization in place.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn update_organization(
        &self,
        organization: &Organization,
    ) -> Result<(), ClientError> {
        let request = ApiRequest::builder(
            HttpMethod::Put,
            format!("{ORGANIZATIONS}/{}", organization.id),
        )
        .body(xml::to_node(organization)?)
        .build()?;
        self.execute_expect_ok(request).await
    }

    /// Deletes an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn delete_organization(&self, organization_id: i64) -> Result<(), ClientError> {
        let request = ApiRequest::builder(
            HttpMethod::Delete,
            format!("{ORGANIZATIONS}/{organization_id}"),
        )
        .build()?;
        self.execute_expect_ok(request).await
    }
}
