//! Requester models.
//!
//! Requesters are the end users who raise tickets. Agents can also be listed
//! here when `include_agents` is set.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// An end user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requester {
    /// User ID.
    pub id: u64,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Login email.
    pub primary_email: Option<String>,
    /// Other emails.
    pub secondary_emails: Vec<String>,
    /// Work phone.
    pub work_phone_number: Option<String>,
    /// Mobile phone.
    pub mobile_phone_number: Option<String>,
    /// Departments.
    pub department_ids: Vec<u64>,
    /// Whether the user can see tickets of their department.
    pub can_see_all_tickets_from_associated_departments: bool,
    /// Manager.
    pub reporting_manager_id: Option<u64>,
    /// Postal address.
    pub address: Option<String>,
    /// Time zone name.
    pub time_zone: Option<String>,
    /// Interface language.
    pub language: Option<String>,
    /// Location.
    pub location_id: Option<u64>,
    /// Background notes.
    pub background_information: Option<String>,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the user has ever logged in.
    pub has_logged_in: bool,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

impl Requester {
    /// Returns "First Last", or whatever parts are present.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Collection returned by `GET requesters`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Requesters {
    /// The requesters on this page.
    #[serde(default)]
    pub requesters: Vec<Requester>,
}

/// Single-requester envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RequesterEnvelope {
    /// The requester.
    pub requester: Requester,
}

/// Payload for `POST requesters`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRequesterModel {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Required unless a phone number is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub department_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CreateRequesterModel {
    /// Creates a requester with a name and login email.
    pub fn new(first_name: impl Into<String>, primary_email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            primary_email: Some(primary_email.into()),
            ..Self::default()
        }
    }
}

/// Payload for `PUT requesters/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRequesterModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
}

/// Filters for `GET requesters`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRequestersOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Exact email match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Also return agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_agents: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_partial() {
        let requester = Requester {
            first_name: Some("Rachel".to_string()),
            ..Requester::default()
        };
        assert_eq!(requester.display_name(), "Rachel");
    }

    #[test]
    fn test_create_requester_omits_unset() {
        let json = serde_json::to_value(CreateRequesterModel::new("Rachel", "rachel@example.com")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"first_name": "Rachel", "primary_email": "rachel@example.com"})
        );
    }
}
