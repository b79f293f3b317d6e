//! Change models.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// Change status codes.
pub mod status {
    /// Open.
    pub const OPEN: u32 = 1;
    /// Planning.
    pub const PLANNING: u32 = 2;
    /// Awaiting approval.
    pub const APPROVAL: u32 = 3;
    /// Pending release.
    pub const PENDING_RELEASE: u32 = 4;
    /// Pending review.
    pub const PENDING_REVIEW: u32 = 5;
    /// Closed.
    pub const CLOSED: u32 = 6;
}

/// Change priority codes.
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

/// Change impact codes.
pub mod impact {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
}

/// Change type codes.
pub mod change_type {
    /// Minor.
    pub const MINOR: u32 = 1;
    /// Standard.
    pub const STANDARD: u32 = 2;
    /// Major.
    pub const MAJOR: u32 = 3;
    /// Emergency.
    pub const EMERGENCY: u32 = 4;
}

/// Change risk codes.
pub mod risk {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
    /// Very high.
    pub const VERY_HIGH: u32 = 4;
}

/// A change request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Change {
    /// Change ID.
    pub id: u64,
    /// Assigned agent.
    pub agent_id: Option<u64>,
    /// Plain-text description.
    pub description_text: Option<String>,
    /// Requester.
    pub requester_id: Option<u64>,
    /// Assigned group.
    pub group_id: Option<u64>,
    /// See [`priority`].
    pub priority: u32,
    /// See [`impact`].
    pub impact: u32,
    /// See [`status`].
    pub status: u32,
    /// See [`risk`].
    pub risk: u32,
    /// See [`change_type`].
    pub change_type: u32,
    /// Approval state.
    pub approval_status: Option<u32>,
    /// Planned start.
    pub planned_start_date: Option<Timestamp>,
    /// Planned end.
    pub planned_end_date: Option<Timestamp>,
    /// Subject line.
    pub subject: Option<String>,
    /// Department.
    pub department_id: Option<u64>,
    /// Category.
    pub category: Option<String>,
    /// Sub-category.
    pub sub_category: Option<String>,
    /// Item category.
    pub item_category: Option<String>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Linked assets.
    pub assets: Vec<serde_json::Value>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET changes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Changes {
    /// The changes on this page.
    #[serde(default)]
    pub changes: Vec<Change>,
}

/// Single-change envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeEnvelope {
    /// The change.
    pub change: Change,
}

/// Payload for `POST changes`. Fields mirror [`Change`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateChangeModel {
    pub requester_id: u64,
    pub subject: String,
    pub description: String,
    pub priority: u32,
    pub impact: u32,
    pub status: u32,
    pub risk: u32,
    pub change_type: u32,
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

/// Payload for `PUT changes/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChangeModel {
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
    pub impact: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
}

/// Filters for `GET changes`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListChangesOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Predefined filter, e.g. `my_open` or `unassigned`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Only changes raised by this requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    /// Only changes updated after this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filters_skip_unset() {
        let opts = ListChangesOptions {
            filter: Some("my_open".to_string()),
            ..ListChangesOptions::default()
        };
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json, serde_json::json!({"filter": "my_open"}));
    }

    #[test]
    fn test_change_deserialization() {
        let json = r#"{"change": {"id": 12, "subject": "Upgrade DB", "status": 2, "risk": 3,
            "change_type": 3, "custom_fields": {"cab": true}}}"#;
        let envelope: ChangeEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.change.status, status::PLANNING);
        assert_eq!(envelope.change.change_type, change_type::MAJOR);
        assert_eq!(envelope.change.custom_fields["cab"], true);
    }
}
