//! Ticket and request resources.
//!
//! Tickets are read and written through two endpoint families: `tickets`
//! for agent-side access and `requests` for end-user-side access (paired
//! with the on-behalf-of header). Both serve the same `Ticket` shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiRequest, ClientError, HttpMethod, ZendeskClient};
use crate::resources::{fetch_all_pages, Page};
use crate::xml::{self, scalar, FieldSpec, TypeSpec, XmlContent, XmlResource};

const TICKETS: &str = "tickets";
const REQUESTS: &str = "requests";

/// Ticket priority levels, as the service numbers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TicketPriority {
    /// No priority set.
    #[default]
    None,
    /// Low priority.
    Low,
    /// Normal priority.
    Normal,
    /// High priority.
    High,
    /// Urgent priority.
    Urgent,
}

impl TicketPriority {
    /// Returns the numeric id carried in `priority-id`.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Normal => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }
}

/// A helpdesk ticket.
///
/// The first comment on a ticket is always equivalent to its description.
/// Custom fields appear under `ticket-field-entries`; to update one, edit
/// the matching entry and save the ticket. Comments cannot be updated that
/// way — use [`ZendeskClient::add_comment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Ticket {
    /// The ticket id. Assigned by the service, never written back.
    pub nice_id: i64,
    /// Short summary line.
    pub subject: Option<String>,
    /// Full problem description.
    pub description: Option<String>,
    /// Priority, see [`TicketPriority::id`].
    pub priority_id: i32,
    /// Workflow status. Assigned by the service, never written back.
    pub status_id: i32,
    /// The requesting user's id.
    pub requester_id: Option<i64>,
    /// Requester name, for create-with-requester flows.
    pub requester_name: Option<String>,
    /// Requester email, for create-with-requester flows.
    pub requester_email: Option<String>,
    /// Assigned agent, if any.
    pub assignee_id: Option<i64>,
    /// Assigned group, if any.
    pub group_id: Option<i64>,
    /// Tags to set, space separated.
    pub set_tags: Option<String>,
    /// Tags currently on the ticket. Read-only.
    pub current_tags: Option<String>,
    /// Creation time. Read-only.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time. Read-only.
    pub updated_at: Option<DateTime<Utc>>,
    /// The ticket's comment thread.
    pub comments: Vec<Comment>,
    /// Custom field values.
    pub ticket_field_entries: Vec<TicketFieldEntry>,
}

impl XmlResource for Ticket {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("Ticket")
            .root("ticket")
            .field(
                FieldSpec::new(
                    "nice_id",
                    |t: &Ticket| Ok(Some(XmlContent::Text(t.nice_id.to_string()))),
                    |t, c| {
                        t.nice_id = scalar::parse_i64(c.text()?)?;
                        Ok(())
                    },
                )
                .name("nice-id")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "subject",
                    |t: &Ticket| Ok(t.subject.clone().map(XmlContent::Text)),
                    |t, c| {
                        t.subject = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .index(0),
            )
            .field(
                FieldSpec::new(
                    "description",
                    |t: &Ticket| Ok(t.description.clone().map(XmlContent::Text)),
                    |t, c| {
                        t.description = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .index(1),
            )
            .field(
                FieldSpec::new(
                    "priority_id",
                    |t: &Ticket| Ok(Some(XmlContent::Text(t.priority_id.to_string()))),
                    |t, c| {
                        t.priority_id = scalar::parse_i32(c.text()?)?;
                        Ok(())
                    },
                )
                .name("priority-id"),
            )
            .field(
                FieldSpec::new(
                    "status_id",
                    |t: &Ticket| Ok(Some(XmlContent::Text(t.status_id.to_string()))),
                    |t, c| {
                        t.status_id = scalar::parse_i32(c.text()?)?;
                        Ok(())
                    },
                )
                .name("status-id")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "requester_id",
                    |t: &Ticket| Ok(t.requester_id.map(|v| XmlContent::Text(v.to_string()))),
                    |t, c| {
                        t.requester_id = Some(scalar::parse_i64(c.text()?)?);
                        Ok(())
                    },
                )
                .name("requester-id"),
            )
            .field(
                FieldSpec::new(
                    "requester_name",
                    |t: &Ticket| Ok(t.requester_name.clone().map(XmlContent::Text)),
                    |t, c| {
                        t.requester_name = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("requester-name"),
            )
            .field(
                FieldSpec::new(
                    "requester_email",
                    |t: &Ticket| Ok(t.requester_email.clone().map(XmlContent::Text)),
                    |t, c| {
                        t.requester_email = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("requester-email"),
            )
            .field(
                FieldSpec::new(
                    "assignee_id",
                    |t: &Ticket| Ok(t.assignee_id.map(|v| XmlContent::Text(v.to_string()))),
                    |t, c| {
                        t.assignee_id = Some(scalar::parse_i64(c.text()?)?);
                        Ok(())
                    },
                )
                .name("assignee-id"),
            )
            .field(
                FieldSpec::new(
                    "group_id",
                    |t: &Ticket| Ok(t.group_id.map(|v| XmlContent::Text(v.to_string()))),
                    |t, c| {
                        t.group_id = Some(scalar::parse_i64(c.text()?)?);
                        Ok(())
                    },
                )
                .name("group-id"),
            )
            .field(
                FieldSpec::new(
                    "set_tags",
                    |t: &Ticket| Ok(t.set_tags.clone().map(XmlContent::Text)),
                    |t, c| {
                        t.set_tags = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("set-tags"),
            )
            .field(
                FieldSpec::new(
                    "current_tags",
                    |t: &Ticket| Ok(t.current_tags.clone().map(XmlContent::Text)),
                    |t, c| {
                        t.current_tags = Some(c.text()?.to_string());
                        Ok(())
                    },
                )
                .name("current-tags")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "created_at",
                    |t: &Ticket| {
                        Ok(t.created_at
                            .as_ref()
                            .map(|d| XmlContent::Text(scalar::format_datetime(d))))
                    },
                    |t, c| {
                        t.created_at = Some(scalar::parse_datetime(c.text()?)?);
                        Ok(())
                    },
                )
                .name("created-at")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "updated_at",
                    |t: &Ticket| {
                        Ok(t.updated_at
                            .as_ref()
                            .map(|d| XmlContent::Text(scalar::format_datetime(d))))
                    },
                    |t, c| {
                        t.updated_at = Some(scalar::parse_datetime(c.text()?)?);
                        Ok(())
                    },
                )
                .name("updated-at")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "comments",
                    |t: &Ticket| {
                        if t.comments.is_empty() {
                            return Ok(None);
                        }
                        Ok(Some(XmlContent::Items(
                            t.comments
                                .iter()
                                .map(xml::to_node)
                                .collect::<Result<_, _>>()?,
                        )))
                    },
                    |t, c| {
                        t.comments = c
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
                    "ticket_field_entries",
                    |t: &Ticket| {
                        if t.ticket_field_entries.is_empty() {
                            return Ok(None);
                        }
                        Ok(Some(XmlContent::Items(
                            t.ticket_field_entries
                                .iter()
                                .map(xml::to_node)
                                .collect::<Result<_, _>>()?,
                        )))
                    },
                    |t, c| {
                        t.ticket_field_entries = c
                            .items()?
                            .iter()
                            .map(xml::from_node)
                            .collect::<Result<_, _>>()?;
                        Ok(())
                    },
                )
                .name("ticket-field-entries")
                .list()
                .item_name("ticket-field-entry"),
            )
    }
}

/// A comment on a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Comment {
    /// The comment text.
    pub value: Option<String>,
    /// The authoring user. Assigned by the service, never written back.
    pub author_id: Option<i64>,
    /// Whether the requester can see the comment.
    pub is_public: bool,
    /// Creation time. Read-only.
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Creates a public comment with the given text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

impl Default for Comment {
    fn default() -> Self {
        Self {
            value: None,
            author_id: None,
            is_public: true,
            created_at: None,
        }
    }
}

impl XmlResource for Comment {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("Comment")
            .root("comment")
            .field(FieldSpec::new(
                "value",
                |m: &Comment| Ok(m.value.clone().map(XmlContent::Text)),
                |m, c| {
                    m.value = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
            .field(
                FieldSpec::new(
                    "author_id",
                    |m: &Comment| Ok(m.author_id.map(|v| XmlContent::Text(v.to_string()))),
                    |m, c| {
                        m.author_id = Some(scalar::parse_i64(c.text()?)?);
                        Ok(())
                    },
                )
                .name("author-id")
                .skip(),
            )
            .field(
                FieldSpec::new(
                    "is_public",
                    |m: &Comment| Ok(Some(XmlContent::Text(scalar::format_bool(m.is_public)))),
                    |m, c| {
                        m.is_public = scalar::parse_bool(c.text()?)?;
                        Ok(())
                    },
                )
                .name("is-public"),
            )
            .field(
                FieldSpec::new(
                    "created_at",
                    |m: &Comment| {
                        Ok(m.created_at
                            .as_ref()
                            .map(|d| XmlContent::Text(scalar::format_datetime(d))))
                    },
                    |m, c| {
                        m.created_at = Some(scalar::parse_datetime(c.text()?)?);
                        Ok(())
                    },
                )
                .name("created-at")
                .skip(),
            )
    }
}

/// A custom field value attached to a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TicketFieldEntry {
    /// The id of the field definition, see
    /// [`ZendeskClient::ticket_fields`].
    pub ticket_field_id: i64,
    /// The field's value, as text.
    pub value: Option<String>,
}

impl XmlResource for TicketFieldEntry {
    fn xml_spec() -> TypeSpec<Self> {
        TypeSpec::new("TicketFieldEntry")
            .root("ticket-field-entry")
            .field(
                FieldSpec::new(
                    "ticket_field_id",
                    |e: &TicketFieldEntry| {
                        Ok(Some(XmlContent::Text(e.ticket_field_id.to_string())))
                    },
                    |e, c| {
                        e.ticket_field_id = scalar::parse_i64(c.text()?)?;
                        Ok(())
                    },
                )
                .name("ticket-field-id"),
            )
            .field(FieldSpec::new(
                "value",
                |e: &TicketFieldEntry| Ok(e.value.clone().map(XmlContent::Text)),
                |e, c| {
                    e.value = Some(c.text()?.to_string());
                    Ok(())
                },
            ))
    }
}

impl ZendeskClient {
    /// Fetches a single ticket by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and decode
    /// errors when the body does not map to a ticket.
    pub async fn ticket(&self, id: i64) -> Result<Ticket, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Get, format!("{TICKETS}/{id}")).build()?;
        self.execute_typed(request).await
    }

    /// Fetches one page of the tickets requested by an end user.
    ///
    /// The open tickets come from an unfiltered `requests` call acting on
    /// behalf of the user; solved tickets live behind the `solved` filter
    /// on the same page number, so a second call fetches those and the
    /// results are concatenated, unfiltered first.
    ///
    /// # Errors
    ///
    /// Propagates transport, rejection, and decode errors from either
    /// call.
    pub async fn tickets_for_user_page(
        &self,
        email: &str,
        page: u32,
    ) -> Result<Page<Ticket>, ClientError> {
        let open = self
            .fetch_page(user_requests(email, page, None)?)
            .await?;
        let Page::Items(mut tickets) = open else {
            return Ok(Page::End);
        };

        let solved = self
            .fetch_page(user_requests(email, page, Some("solved"))?)
            .await?;
        tickets.extend(solved.into_items());
        Ok(Page::Items(tickets))
    }

    /// Fetches every ticket requested by an end user, across pages.
    ///
    /// Pages are fetched from 1 up to the configured ceiling, stopping
    /// early when a page comes back empty or the service signals the end
    /// of the data.
    ///
    /// # Errors
    ///
    /// A genuine error on any page fails the whole operation.
    pub async fn all_tickets_for_user(&self, email: &str) -> Result<Vec<Ticket>, ClientError> {
        fetch_all_pages(self.config().page_ceiling(), |page| {
            self.tickets_for_user_page(email, page)
        })
        .await
    }

    /// Fetches one page of the tickets matched by a view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses other than
    /// the end-of-data cases.
    pub async fn tickets_in_view_page(
        &self,
        view_id: i64,
        page: u32,
    ) -> Result<Page<Ticket>, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Get, format!("rules/{view_id}"))
            .query_param("page", page.to_string())
            .build()?;
        self.fetch_page(request).await
    }

    /// Fetches every ticket matched by a view, across pages.
    ///
    /// # Errors
    ///
    /// A genuine error on any page fails the whole operation.
    pub async fn all_tickets_in_view(&self, view_id: i64) -> Result<Vec<Ticket>, ClientError> {
        fetch_all_pages(self.config().page_ceiling(), |page| {
            self.tickets_in_view_page(view_id, page)
        })
        .await
    }

    /// Creates a ticket and returns its id from the `Location` header.
    ///
    /// Returns [`crate::clients::UNKNOWN_ID`] when the service accepted
    /// the ticket but the header was absent or unparsable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the service refuses the
    /// input and [`ClientError::Status`] for other failures.
    pub async fn create_ticket(&self, ticket: &Ticket) -> Result<i64, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Post, TICKETS)
            .body(xml::to_node(ticket)?)
            .build()?;
        self.execute_created_id(request).await
    }

    /// Creates a ticket, creating the requester too when no user with
    /// `requester_email` exists yet. When the requester exists, the ticket
    /// is filed under the existing user.
    ///
    /// # Errors
    ///
    /// Same as [`ZendeskClient::create_ticket`].
    pub async fn create_ticket_with_requester(&self, ticket: &Ticket) -> Result<i64, ClientError> {
        self.create_ticket(ticket).await
    }

    /// Creates a ticket as the given end user, via the `requests` endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`ZendeskClient::create_ticket`].
    pub async fn create_ticket_as_end_user(
        &self,
        email: &str,
        ticket: &Ticket,
    ) -> Result<i64, ClientError> {
        let request = ApiRequest::builder(HttpMethod::Post, REQUESTS)
            .on_behalf_of(email)
            .body(xml::to_node(ticket)?)
            .build()?;
        self.execute_created_id(request).await
    }

    /// Adds a comment to a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn add_comment(&self, ticket_id: i64, comment: &Comment) -> Result<(), ClientError> {
        let request = ApiRequest::builder(HttpMethod::Put, format!("{TICKETS}/{ticket_id}"))
            .body(xml::to_node(comment)?)
            .build()?;
        self.execute_expect_ok(request).await
    }

    /// Updates a ticket in place.
    ///
    /// The comment thread is dropped from the update body — comments
    /// cannot be written this way; use [`ZendeskClient::add_comment`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn update_ticket(&self, ticket: &Ticket) -> Result<(), ClientError> {
        let mut body = ticket.clone();
        body.comments.clear();
        let request = ApiRequest::builder(HttpMethod::Put, format!("{TICKETS}/{}", ticket.nice_id))
            .body(xml::to_node(&body)?)
            .build()?;
        self.execute_expect_ok(request).await
    }

    /// Appends a comment to a ticket acting as its requester.
    ///
    /// Looks up the ticket's requester to resolve the on-behalf-of email,
    /// then updates through the `requests` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingRequesterEmail`] when the requester
    /// has no email on file, and the usual transport and status errors
    /// otherwise.
    pub async fn update_ticket_as_end_user(
        &self,
        ticket_id: i64,
        comment: &Comment,
    ) -> Result<(), ClientError> {
        let ticket = self.ticket(ticket_id).await?;
        let requester_id = ticket
            .requester_id
            .ok_or(ClientError::MissingRequesterEmail { ticket_id })?;
        let user = self.user(requester_id).await?;
        let email = user
            .email
            .ok_or(ClientError::MissingRequesterEmail { ticket_id })?;

        let request = ApiRequest::builder(HttpMethod::Put, format!("{REQUESTS}/{ticket_id}"))
            .on_behalf_of(email)
            .body(xml::to_node(comment)?)
            .build()?;
        self.execute_expect_ok(request).await
    }

    /// Deletes a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn delete_ticket(&self, ticket_id: i64) -> Result<(), ClientError> {
        let request =
            ApiRequest::builder(HttpMethod::Delete, format!("{TICKETS}/{ticket_id}")).build()?;
        self.execute_expect_ok(request).await
    }

    /// Deletes an end-user request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] when the service does not answer
    /// with success.
    pub async fn delete_request(&self, request_id: i64) -> Result<(), ClientError> {
        let request =
            ApiRequest::builder(HttpMethod::Delete, format!("{REQUESTS}/{request_id}")).build()?;
        self.execute_expect_ok(request).await
    }
}

fn user_requests(email: &str, page: u32, filter: Option<&str>) -> Result<ApiRequest, ClientError> {
    let mut builder = ApiRequest::builder(HttpMethod::Get, REQUESTS)
        .on_behalf_of(email)
        .query_param("page", page.to_string());
    if let Some(filter) = filter {
        builder = builder.query_param("filter", filter);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlNode;

    #[test]
    fn test_priority_ids_match_the_service() {
        assert_eq!(TicketPriority::None.id(), 0);
        assert_eq!(TicketPriority::Low.id(), 1);
        assert_eq!(TicketPriority::Normal.id(), 2);
        assert_eq!(TicketPriority::High.id(), 3);
        assert_eq!(TicketPriority::Urgent.id(), 4);
    }

    #[test]
    fn test_ticket_serializes_without_read_only_fields() {
        let ticket = Ticket {
            nice_id: 482,
            subject: Some("Printer on fire".to_string()),
            description: Some("It started smoking".to_string()),
            priority_id: TicketPriority::Urgent.id(),
            status_id: 2,
            current_tags: Some("hardware".to_string()),
            ..Ticket::default()
        };
        let node = xml::to_node(&ticket).unwrap();

        assert_eq!(node.name, "ticket");
        assert!(node.child("nice-id").is_none());
        assert!(node.child("status-id").is_none());
        assert!(node.child("current-tags").is_none());
        assert_eq!(node.child("subject").unwrap().text_content(), "Printer on fire");
        assert_eq!(node.child("priority-id").unwrap().text_content(), "4");
    }

    #[test]
    fn test_ticket_subject_and_description_come_first() {
        let ticket = Ticket {
            subject: Some("s".to_string()),
            description: Some("d".to_string()),
            set_tags: Some("t".to_string()),
            ..Ticket::default()
        };
        let node = xml::to_node(&ticket).unwrap();
        let names: Vec<&str> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(&names[..2], &["subject", "description"]);
    }

    #[test]
    fn test_ticket_decodes_read_only_fields_from_wire() {
        let ticket: Ticket = xml::from_xml(
            "<ticket><nice-id>482</nice-id><status-id>3</status-id>\
             <subject>Hi</subject><current-tags>a b</current-tags>\
             <created-at>2011-07-20T22:55:29Z</created-at></ticket>",
        )
        .unwrap();

        assert_eq!(ticket.nice_id, 482);
        assert_eq!(ticket.status_id, 3);
        assert_eq!(ticket.current_tags.as_deref(), Some("a b"));
        assert!(ticket.created_at.is_some());
    }

    #[test]
    fn test_ticket_field_entries_use_the_entry_item_tag() {
        let ticket = Ticket {
            ticket_field_entries: vec![TicketFieldEntry {
                ticket_field_id: 7,
                value: Some("blue".to_string()),
            }],
            ..Ticket::default()
        };
        let node = xml::to_node(&ticket).unwrap();
        let entries = node.child("ticket-field-entries").unwrap();
        assert_eq!(entries.children.len(), 1);
        assert_eq!(entries.children[0].name, "ticket-field-entry");
        assert_eq!(
            entries.children[0].child("ticket-field-id").unwrap().text_content(),
            "7"
        );
    }

    #[test]
    fn test_ticket_comments_round_trip() {
        let wire = "<ticket><comments><comment><value>first</value></comment>\
                    <comment><value>second</value></comment></comments></ticket>";
        let ticket: Ticket = xml::from_xml(wire).unwrap();
        assert_eq!(ticket.comments.len(), 2);
        assert_eq!(ticket.comments[0].value.as_deref(), Some("first"));
        assert!(ticket.comments[0].is_public);

        let node = xml::to_node(&ticket).unwrap();
        let comments = node.child("comments").unwrap();
        assert!(comments.children.iter().all(|c| c.name == "comment"));
    }

    #[test]
    fn test_comment_new_is_public_with_text() {
        let comment = Comment::new("on my way");
        assert_eq!(comment.value.as_deref(), Some("on my way"));
        assert!(comment.is_public);

        let node = xml::to_node(&comment).unwrap();
        assert_eq!(node.name, "comment");
        assert_eq!(node.child("is-public").unwrap().text_content(), "true");
        assert!(node.child("author-id").is_none());
    }

    #[test]
    fn test_ticket_decodes_from_json_read_path() {
        let json = r#"{"nice-id": 9, "subject": "From JSON", "priority-id": 2}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.nice_id, 9);
        assert_eq!(ticket.subject.as_deref(), Some("From JSON"));
        assert_eq!(ticket.priority_id, 2);
    }

    #[test]
    fn test_empty_comment_list_is_omitted_from_output() {
        let node = xml::to_node(&Ticket::default()).unwrap();
        assert!(node.child("comments").is_none());
        // sanity: a populated list is not
        let with = Ticket {
            comments: vec![Comment::new("x")],
            ..Ticket::default()
        };
        let node: XmlNode = xml::to_node(&with).unwrap();
        assert!(node.child("comments").is_some());
    }
}
