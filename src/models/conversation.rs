//! Ticket conversation models.
//!
//! Conversations are the replies, forwards and notes exchanged on a ticket.

use serde::{Deserialize, Serialize};

use super::{TicketAttachment, Timestamp};

/// One entry in a ticket's conversation thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    /// Unique conversation ID.
    pub id: u64,

    /// Files attached to the message.
    pub attachments: Vec<TicketAttachment>,

    /// Message content (HTML).
    pub body: Option<String>,

    /// Message content as plain text.
    pub body_text: Option<String>,

    /// Whether the requester sent this message.
    pub incoming: bool,

    /// Recipients of the message.
    pub to_emails: Vec<String>,

    /// Private notes are hidden from the requester.
    pub private: bool,

    /// Channel code (email, note, ...).
    pub source: Option<u32>,

    /// Support address the message went through.
    pub support_email: Option<String>,

    /// Owning ticket.
    pub ticket_id: Option<u64>,

    /// Author.
    pub user_id: Option<u64>,

    /// When the message was created.
    pub created_at: Option<Timestamp>,

    /// When the message was last edited.
    pub updated_at: Option<Timestamp>,
}

impl Conversation {
    /// Returns the plain-text content, the HTML content, or a placeholder.
    pub fn display_content(&self) -> &str {
        self.body_text
            .as_deref()
            .or(self.body.as_deref())
            .unwrap_or("(No content)")
    }

    /// Returns the direction indicator.
    pub fn direction(&self) -> &str {
        if self.incoming {
            "Incoming"
        } else {
            "Outgoing"
        }
    }
}

/// Collection returned by `GET tickets/{id}/conversations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Conversations {
    /// The conversation thread.
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_display_content() {
        let conv = Conversation {
            id: 123,
            body_text: Some("Thanks, it works now".to_string()),
            incoming: true,
            ..Conversation::default()
        };
        assert_eq!(conv.display_content(), "Thanks, it works now");
        assert_eq!(conv.direction(), "Incoming");
    }

    #[test]
    fn test_conversation_falls_back_to_html() {
        let conv = Conversation {
            body: Some("<p>hi</p>".to_string()),
            ..Conversation::default()
        };
        assert_eq!(conv.display_content(), "<p>hi</p>");
        assert_eq!(conv.direction(), "Outgoing");
    }

    #[test]
    fn test_list_conversations_deserialization() {
        let json = r#"{
            "conversations": [
                {
                    "id": 17,
                    "body": "<div>Please reboot</div>",
                    "body_text": "Please reboot",
                    "incoming": false,
                    "private": true,
                    "to_emails": ["user@example.com"],
                    "ticket_id": 42,
                    "user_id": 3,
                    "created_at": "2021-03-04T09:15:00Z",
                    "attachments": [{"name": "log.txt", "size": 120, "content_type": "text/plain"}]
                }
            ]
        }"#;
        let parsed: Conversations = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.conversations.len(), 1);
        let conv = &parsed.conversations[0];
        assert!(conv.private);
        assert_eq!(conv.ticket_id, Some(42));
        assert_eq!(conv.attachments[0].size, 120);
    }
}
