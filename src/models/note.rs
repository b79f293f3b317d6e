//! Note models shared by changes, problems and releases.
//!
//! Notes are internal comments attached to an ITIL record. All three record
//! types use the same shape.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A note attached to a change, problem or release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note ID.
    pub id: u64,

    /// Author's user ID.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Note content (HTML).
    #[serde(default)]
    pub body: Option<String>,

    /// Note content as plain text.
    #[serde(default)]
    pub body_text: Option<String>,

    /// Addresses notified about the note.
    #[serde(default)]
    pub notify_emails: Vec<String>,

    /// When the note was created.
    #[serde(default)]
    pub created_at: Option<Timestamp>,

    /// When the note was last edited.
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Note {
    /// Returns the plain-text content, the HTML content, or a placeholder.
    pub fn display_content(&self) -> &str {
        self.body_text
            .as_deref()
            .or(self.body.as_deref())
            .unwrap_or("(No content)")
    }
}

/// Collection returned by `GET .../notes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notes {
    /// The notes.
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Single-note envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteEnvelope {
    /// The note.
    pub note: Note,
}

/// Request body for creating or updating a note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteModel {
    /// The note content (HTML).
    pub body: String,

    /// Addresses to notify.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notify_emails: Vec<String>,
}

impl NoteModel {
    /// Creates a note body with the given content.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            notify_emails: Vec::new(),
        }
    }

    /// Adds an address to notify.
    pub fn with_notify_email(mut self, email: impl Into<String>) -> Self {
        self.notify_emails.push(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_display_content_prefers_text() {
        let note = Note {
            id: 1,
            body: Some("<p>Rollback done</p>".to_string()),
            body_text: Some("Rollback done".to_string()),
            ..Note::default()
        };
        assert_eq!(note.display_content(), "Rollback done");
    }

    #[test]
    fn test_note_display_content_empty() {
        let note = Note::default();
        assert_eq!(note.display_content(), "(No content)");
    }

    #[test]
    fn test_note_model_serialization() {
        let json = serde_json::to_value(NoteModel::new("Deployed")).unwrap();
        assert_eq!(json, serde_json::json!({"body": "Deployed"}));

        let json = serde_json::to_value(NoteModel::new("Deployed").with_notify_email("ops@example.com")).unwrap();
        assert_eq!(json["notify_emails"][0], "ops@example.com");
    }

    #[test]
    fn test_note_envelope_deserialization() {
        let json = r#"{"note": {"id": 5, "user_id": 2, "body": "<p>hi</p>", "body_text": "hi",
            "notify_emails": [], "created_at": "2021-06-01T10:00:00Z", "updated_at": "2021-06-01T10:00:00Z"}}"#;
        let envelope: NoteEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.note.id, 5);
        assert_eq!(envelope.note.user_id, Some(2));
    }
}
