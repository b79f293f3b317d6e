//! Announcement models.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// A helpdesk-wide or targeted announcement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Announcement {
    /// Unique announcement ID.
    pub id: u64,
    /// Agent who created it.
    pub created_by: Option<u64>,
    /// `active`, `archived` or `scheduled`.
    pub state: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Plain-text body.
    pub body: Option<String>,
    /// HTML body.
    pub body_html: Option<String>,
    /// Start of visibility.
    pub visible_from: Option<Timestamp>,
    /// End of visibility.
    pub visible_to: Option<Timestamp>,
    /// `everyone`, `agents_only` or `agents_and_groups`.
    pub visibility: Option<String>,
    /// Target departments.
    pub departments: Vec<u64>,
    /// Target groups.
    pub groups: Vec<u64>,
    /// Whether the current user has read it.
    pub is_read: bool,
    /// Whether an email went out.
    pub send_email: bool,
    /// Extra recipients.
    pub additional_emails: Vec<String>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET announcements`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Announcements {
    /// The announcements on this page.
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// Single-announcement envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncementEnvelope {
    /// The announcement.
    pub announcement: Announcement,
}

/// Payload for creating or updating an announcement. Fields mirror [`Announcement`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnouncementModel {
    pub title: String,
    pub body_html: String,
    pub visible_from: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_to: Option<Timestamp>,
    pub visibility: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_emails: Vec<String>,
}

/// Filters for `GET announcements`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAnnouncementsOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// `active`, `archived` or `scheduled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
