//! Ticket models.
//!
//! Tickets are the incidents and service requests raised by requesters.
//! Status, source and priority travel as integer codes; the constants in
//! [`status`], [`source`] and [`priority`] name them.

use serde::{Deserialize, Serialize};

use super::{Actor, ListOptions, Timestamp};

/// Ticket status codes.
pub mod status {
    /// Open.
    pub const OPEN: u32 = 2;
    /// Pending.
    pub const PENDING: u32 = 3;
    /// Resolved.
    pub const RESOLVED: u32 = 4;
    /// Closed.
    pub const CLOSED: u32 = 5;

    /// Returns the label for a status code.
    pub fn label(code: u32) -> &'static str {
        match code {
            OPEN => "Open",
            PENDING => "Pending",
            RESOLVED => "Resolved",
            CLOSED => "Closed",
            _ => "Unknown",
        }
    }
}

/// Ticket source (channel) codes.
pub mod source {
    /// Email.
    pub const EMAIL: u32 = 1;
    /// Self-service portal.
    pub const PORTAL: u32 = 2;
    /// Phone.
    pub const PHONE: u32 = 3;
    /// Chat.
    pub const CHAT: u32 = 4;
    /// Feedback widget.
    pub const WIDGET: u32 = 5;
    /// Yammer.
    pub const YAMMER: u32 = 6;
    /// AWS CloudWatch alert.
    pub const AWS_CLOUDWATCH: u32 = 7;
    /// PagerDuty alert.
    pub const PAGERDUTY: u32 = 8;
    /// Walk-up desk.
    pub const WALK_UP: u32 = 9;
    /// Slack.
    pub const SLACK: u32 = 10;
}

/// Ticket priority codes.
pub mod priority {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
    /// Urgent.
    pub const URGENT: u32 = 4;

    /// Returns the label for a priority code.
    pub fn label(code: u32) -> &'static str {
        match code {
            LOW => "Low",
            MEDIUM => "Medium",
            HIGH => "High",
            URGENT => "Urgent",
            _ => "Unknown",
        }
    }
}

/// A ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    /// Ticket ID.
    pub id: u64,
    /// Attached files.
    pub attachments: Vec<TicketAttachment>,
    /// CC addresses.
    pub cc_emails: Vec<String>,
    /// Requester's department.
    pub department_id: Option<u64>,
    /// Whether the ticket is in the trash.
    pub deleted: bool,
    /// HTML description.
    pub description: Option<String>,
    /// Plain-text description.
    pub description_text: Option<String>,
    /// Resolution due date.
    pub due_by: Option<Timestamp>,
    /// Requester's email.
    pub email: Option<String>,
    /// Mailbox the ticket arrived through.
    pub email_config_id: Option<u64>,
    /// First response due date.
    #[serde(rename = "fr_due_by")]
    pub first_response_due_by: Option<Timestamp>,
    /// Whether the first response deadline passed.
    #[serde(rename = "fr_escalated")]
    pub first_response_escalated: bool,
    /// Forwarded-to addresses.
    #[serde(rename = "fwd_emails")]
    pub forward_emails: Vec<String>,
    /// Assigned group.
    pub group_id: Option<u64>,
    /// Whether the resolution deadline passed.
    pub is_escalated: bool,
    /// Requester's name.
    pub name: Option<String>,
    /// Requester's phone.
    pub phone: Option<String>,
    /// See [`priority`].
    pub priority: u32,
    /// Category.
    pub category: Option<String>,
    /// Sub-category.
    pub sub_category: Option<String>,
    /// Item category.
    pub item_category: Option<String>,
    /// CC addresses on replies.
    pub reply_cc_emails: Vec<String>,
    /// Requester.
    pub requester_id: Option<u64>,
    /// Assigned agent.
    pub responder_id: Option<u64>,
    /// See [`source`].
    pub source: u32,
    /// Whether the ticket is marked as spam.
    pub spam: bool,
    /// See [`status`].
    pub status: u32,
    /// Subject line.
    pub subject: Option<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// To addresses.
    pub to_emails: Vec<String>,
    /// `Incident` or `Service Request`.
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    /// Urgency code, 1 (low) to 3 (high).
    pub urgency: Option<u32>,
    /// Impact code, 1 (low) to 3 (high).
    pub impact: Option<u32>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

impl Ticket {
    /// Returns the status label.
    pub fn status_label(&self) -> &'static str {
        status::label(self.status)
    }

    /// Returns the priority label.
    pub fn priority_label(&self) -> &'static str {
        priority::label(self.priority)
    }
}

/// A file attached to a ticket or conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketAttachment {
    /// Attachment ID.
    pub id: Option<u64>,
    /// File name.
    pub name: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// MIME type.
    pub content_type: Option<String>,
    /// Download link.
    pub attachment_url: Option<String>,
    /// Upload time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET tickets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tickets {
    /// The tickets on this page.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// Single-ticket envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketEnvelope {
    /// The ticket.
    pub ticket: Ticket,
}

/// One entry in a ticket's audit trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketActivity {
    /// Who did it.
    pub actor: Actor,
    /// Summary line.
    pub content: Option<String>,
    /// Individual field changes.
    pub sub_contents: Vec<String>,
    /// When it happened.
    pub created_at: Option<Timestamp>,
}

/// Collection returned by `GET tickets/{id}/activities`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketActivities {
    /// The activities, newest last.
    #[serde(default)]
    pub activities: Vec<TicketActivity>,
}

/// Payload for `POST tickets`.
///
/// One of `requester_id`, `email` or `phone` identifies the requester.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTicketModel {
    pub subject: String,
    pub description: String,
    pub status: u32,
    pub priority: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<Timestamp>,
    #[serde(rename = "fr_due_by", skip_serializing_if = "Option::is_none")]
    pub first_response_due_by: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CreateTicketModel {
    /// An open ticket of medium priority raised by `email`.
    pub fn new(email: impl Into<String>, subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
            status: status::OPEN,
            priority: priority::MEDIUM,
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the source channel.
    pub fn with_source(mut self, source: u32) -> Self {
        self.source = Some(source);
        self
    }
}

/// Payload for `PUT tickets/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTicketModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<Timestamp>,
    #[serde(rename = "fr_due_by", skip_serializing_if = "Option::is_none")]
    pub first_response_due_by: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateTicketModel {
    /// An update that only changes the status.
    pub fn status(status: u32) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Filters for `GET tickets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTicketsOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Requester's email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Requester ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    /// Only tickets updated after this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<Timestamp>,
    /// `Incident` or `Service Request`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
}

impl ListTicketsOptions {
    /// Creates empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets pagination.
    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.list = ListOptions::page(page, per_page);
        self
    }

    /// Filters by requester email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by ticket type.
    pub fn with_type(mut self, ticket_type: impl Into<String>) -> Self {
        self.ticket_type = Some(ticket_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserialization() {
        let json = r#"{
            "ticket": {
                "id": 42,
                "subject": "Printer on fire",
                "status": 2,
                "priority": 4,
                "source": 3,
                "type": "Incident",
                "fr_due_by": "2021-04-01T10:00:00Z",
                "fr_escalated": true,
                "fwd_emails": [],
                "requester_id": 1001,
                "custom_fields": {"floor": 3},
                "created_at": "2021-03-31T10:00:00Z"
            }
        }"#;
        let envelope: TicketEnvelope = serde_json::from_str(json).unwrap();
        let ticket = envelope.ticket;
        assert_eq!(ticket.id, 42);
        assert_eq!(ticket.status_label(), "Open");
        assert_eq!(ticket.priority_label(), "Urgent");
        assert_eq!(ticket.source, source::PHONE);
        assert_eq!(ticket.ticket_type.as_deref(), Some("Incident"));
        assert!(ticket.first_response_escalated);
        assert_eq!(ticket.custom_fields["floor"], 3);
    }

    #[test]
    fn test_labels_for_unknown_codes() {
        assert_eq!(status::label(99), "Unknown");
        assert_eq!(priority::label(0), "Unknown");
    }

    #[test]
    fn test_create_ticket_model() {
        let model = CreateTicketModel::new("user@example.com", "VPN down", "Cannot connect")
            .with_priority(priority::HIGH)
            .with_source(source::PORTAL);
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "subject": "VPN down",
                "description": "Cannot connect",
                "status": 2,
                "priority": 3,
                "source": 2,
                "email": "user@example.com"
            })
        );
    }

    #[test]
    fn test_list_tickets_type_renamed() {
        let opts = ListTicketsOptions::new().with_type("Incident");
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Incident"}));
    }

    #[test]
    fn test_activities_deserialization() {
        let json = r#"{"activities": [{"actor": {"id": 3, "name": "Rachel"}, "content": "closed the ticket",
            "sub_contents": ["Status: Closed"], "created_at": "2021-04-02T10:00:00Z"}]}"#;
        let parsed: TicketActivities = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.activities[0].actor.name.as_deref(), Some("Rachel"));
        assert_eq!(parsed.activities[0].sub_contents.len(), 1);
    }
}
