//! Release models.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// Release priority codes.
pub mod priority {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
    /// Urgent.
    pub const URGENT: u32 = 4;
}

/// Release status codes.
pub mod status {
    /// Open.
    pub const OPEN: u32 = 1;
    /// On hold.
    pub const ON_HOLD: u32 = 2;
    /// In progress.
    pub const IN_PROGRESS: u32 = 3;
    /// Incomplete.
    pub const INCOMPLETE: u32 = 4;
    /// Completed.
    pub const COMPLETED: u32 = 5;
}

/// Release type codes.
pub mod release_type {
    /// Minor.
    pub const MINOR: u32 = 1;
    /// Standard.
    pub const STANDARD: u32 = 2;
    /// Major.
    pub const MAJOR: u32 = 3;
    /// Emergency.
    pub const EMERGENCY: u32 = 4;
}

/// A release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    /// Release ID.
    pub id: u64,
    /// Assigned agent.
    pub agent_id: Option<u64>,
    /// Assigned group.
    pub group_id: Option<u64>,
    /// See [`priority`].
    pub priority: u32,
    /// See [`status`].
    pub status: u32,
    /// See [`release_type`].
    pub release_type: u32,
    /// Subject line.
    pub subject: Option<String>,
    /// HTML description.
    pub description: Option<String>,
    /// Plain-text description.
    pub description_text: Option<String>,
    /// Planned start.
    pub planned_start_date: Option<Timestamp>,
    /// Planned end.
    pub planned_end_date: Option<Timestamp>,
    /// Actual start.
    pub work_start_date: Option<Timestamp>,
    /// Actual end.
    pub work_end_date: Option<Timestamp>,
    /// Department.
    pub department_id: Option<u64>,
    /// Category.
    pub category: Option<String>,
    /// Sub-category.
    pub sub_category: Option<String>,
    /// Item category.
    pub item_category: Option<String>,
    /// Linked assets.
    pub assets: Vec<serde_json::Value>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET releases`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Releases {
    /// The releases on this page.
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Single-release envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEnvelope {
    /// The release.
    pub release: Release,
}

/// Payload for `POST releases`. Fields mirror [`Release`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateReleaseModel {
    pub subject: String,
    pub description: String,
    pub priority: u32,
    pub status: u32,
    pub release_type: u32,
    pub planned_start_date: Timestamp,
    pub planned_end_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Payload for `PUT releases/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReleaseModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_end_date: Option<Timestamp>,
}

/// Filters for `GET releases`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListReleasesOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Predefined view name, e.g. `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
}
