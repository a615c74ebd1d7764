//! User resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiRequest, ClientError, HttpMethod, ZendeskClient};
use crate::xml::{self, scalar, FieldSpec, TypeSpec, XmlContent, XmlResource};

const USERS: &str = "users";

/// An agent or end user on the account.
///
/// `is_active` is never written back: the service throws strange errors
/// when a request carries fields it considers read-only, even when the
/// values are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct User {
    /// The user id. Assigned by the service, never written back.
    pub id: i64,
    /// Display name.
    pub name: Option<String>,
    /// Primary email address.
    pub email: Option<String>,
    /// Role id (end user, agent, admin).
    pub roles: i32,
    /// Access restriction id.
    pub restriction_id: i32,
    /// The user's organization, if any.
    pub organization_id: Option<i64>,
    /// Whether the account is active. Read-only.
    pub is_active: bool,
    /// Whether the primary identity is verified. Read-only.
    pub is_verified: bool,
    /// Phone number.
    pub phone: Option<String>,
    /// Creation time. Read-only.
    pub created_at: Option<DateTime<Utc>>,
    /// Additional email identities. Some endpoints return these under a
    /// `records` element instead of `email-identities`.
    pub email_identities: Vec<UserEmailIdentity>,
}

impl XmlResource for User {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("User")
            .root("user")
            .field(
                FieldSpec::new(
                    "id",
                    |u: &User| Ok(Some(XmlContent::Text(u.id.to_string()))),
                    |u, c| {
                        u.id = scalar::parse_i64(c.text()?)?;
                        Ok(())
                    },
                )
                .skip(),
            )
            .field(FieldSpec::new(
                "name",
                |u: &User| Ok(u.name.clone().map(XmlContent::Text)),
                |u, c| {
                    u.name = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(FieldSpec::new(
                "email",
                |u: &User| Ok(u.email.clone().map(XmlContent::Text)),
                |u, c| {
                    u.email = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(FieldSpec::new(
                "roles",
                |u: &User| Ok(Some(XmlContent::Text(u.roles.to_string()))),
                |u, c| {
                    u.roles = scalar::parse_i32(c.text()?)?;
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "restriction_id",
                    |u: &User| Ok(Some(XmlContent::Text(u.restriction_id.to_string()))),
                    |u, c| {
                        u.restriction_id = scalar::parse_i32(c.text()?)?;
                        Ok(())
                    },
                )
                .name("restriction-id"),
            )
            .field(
                FieldSpec::new(
                    "organization_id",
                    |u: &User| Ok(u.organization_id.map(|v| XmlContent::Text(v.to_string()))),
                    |u, c| {
                        u.organization_id = Some(scalar::parse_i64(c.text()?)?);
                        Ok(())
                    },
                )
                .name("organization-id"),
            )
            .field(
                FieldSpec::new(
                    "is_active",
                    |u: &User| Ok(Some(XmlContent::Text(scalar::format_bool(u.is_active)))),
                    |u, c| {
                        u.is_active = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-active")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "is_verified",
                    |u: &User| Ok(Some(XmlContent::Text(scalar::format_bool(u.is_verified)))),
                    |u, c| {
                        u.is_verified = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-verified")
                .skip(),
            )
            .field(FieldSpec::new(
                "phone",
                |u: &User| Ok(u.phone.clone().map(XmlContent::Text)),
                |u, c| {
                    u.phone = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "created_at",
                    |u: &User| {
                        Ok(u.created_at
                            .as_ref()
                            .map(|d| XmlContent::Text(scalar::format_datetime(d))))
                    },
                    |u, c| {
                        u.created_at = Some(scalar::parse_datetime(c.text()?)?);
                        Ok(())
                    },
                )
                .name("created-at")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "email_identities",
                    |u: &User| {
                        if u.email_identities.is_empty() {
                            return Ok(None);
                        }
                        Ok(Some(XmlContent::Items(
                            u.email_identities
                                .iter()
                                .map(xml::to_node)
                                .collect::<Result<_, _>>()?,
                        )))
                    },
                    |u, c| {
                        u.email_identities = c
                            .items()?
                            .iter()
                            .map(xml::from_node)
                            .collect::<Result<_, _>>()?;
                        Ok(())
                    },
                )
                .name("email-identities")
                .alternate("records")
                .list(),
            )
    }
}

/// A secondary email identity on a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserEmailIdentity {
    /// The email address.
    pub value: Option<String>,
    /// Whether the address is verified. Read-only.
    pub is_verified: bool,
}

impl XmlResource for UserEmailIdentity {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("UserEmailIdentity")
            .root("user-email-identity")
            .field(FieldSpec::new(
                "value",
                |i: &UserEmailIdentity| Ok(i.value.clone().map(XmlContent::Text)),
                |i, c| {
                    i.value = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "is_verified",
                    |i: &UserEmailIdentity| {
                        Ok(Some(XmlContent::Text(scalar::format_bool(i.is_verified))))
                    },
                    |i, c| {
                        i.is_verified = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-verified")
                .skip(),
            )
    }
}

impl ZendeskClient {
    /// Fetches a single user by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors when the body does not map to a user.
    pub async fn user(&self, id: i64) -> Result<User, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Get, format!("{USERS}/{id}")).build()?;
        self.execute_typed(request).await
    }

    /// Fetches every user on the account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors for undecodable items.
    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.collection(USERS, Some("users")).await
    }

    /// Creates a user and returns their id from the `Location` header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the service refuses the
    /// input and [`ClientError::Status`] for other failures.
    pub async fn create_user(&self, user: &User) -> Result<i64, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Post, USERS)
            .body(xml::to_node(user)?)
            .build()?;
        self.execute_created_id(request).await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ClientError> {
        let request =
            ApiRequest::builder(HttpMethod::Delete, format!("{USERS}/{user_id}")).build()?;
        self.execute_expect_ok(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_never_writes_read_only_fields() {
        let user = User {
            id: 91,
            name: Some("Olivia Dunham".to_string()),
            email: Some("olivia@example.com".to_string()),
            is_active: true,
            is_verified: true,
            ..User::default()
        };
        let node = xml::to_node(&user).unwrap();

        assert!(node.child("id").is_none());
        assert!(node.child("is-active").is_none());
        assert!(node.child("is-verified").is_none());
        assert_eq!(node.child("name").unwrap().text_content(), "Olivia Dunham");
    }

    #[test]
    fn test_user_decodes_identities_from_primary_name() {
        let user: User = xml::from_xml(
            "<user><id>91</id><email-identities>\
             <user-email-identity><value>alt@example.com</value></user-email-identity>\
             </email-identities></user>",
        )
        .unwrap();
        assert_eq!(user.id, 91);
        assert_eq!(user.email_identities.len(), 1);
        assert_eq!(
            user.email_identities[0].value.as_deref(),
            Some("alt@example.com")
        );
    }

    #[test]
    fn test_user_decodes_identities_from_records_alternate() {
        // The service sometimes hands the identity list back as `records`
        // with `record` items.
        let user: User = xml::from_xml(
            "<user><records><record><value>alt@example.com</value>\
             <is-verified>true</is-verified></record></records></user>",
        )
        .unwrap();
        assert_eq!(user.email_identities.len(), 1);
        assert!(user.email_identities[0].is_verified);
    }

    #[test]
    fn test_user_is_active_still_reads_from_wire() {
        let user: User = xml::from_xml("<user><is-active>true</is-active></user>").unwrap();
        assert!(user.is_active);
    }
}
