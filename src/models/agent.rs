//! Agent and agent role models.
//!
//! Agents are the technicians working tickets. Roles are read-only from the
//! API's point of view and describe what an agent may do.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// A FreshService agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    /// Unique agent ID.
    pub id: u64,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Occasional agents consume day passes instead of a full seat.
    pub occasional: bool,
    /// Job title.
    pub job_title: Option<String>,
    /// Primary email.
    pub email: Option<String>,
    /// Work phone.
    pub work_phone_number: Option<String>,
    /// Mobile phone.
    pub mobile_phone_number: Option<String>,
    /// Departments the agent belongs to.
    pub department_ids: Vec<u64>,
    /// Whether the agent is active.
    pub active: bool,
    /// Postal address.
    pub address: Option<String>,
    /// Reporting manager's user ID.
    pub reporting_manager_id: Option<u64>,
    /// Time zone name.
    pub time_zone: Option<String>,
    /// `12h` or `24h`.
    pub time_format: Option<String>,
    /// Language code.
    pub language: Option<String>,
    /// Location ID.
    pub location_id: Option<u64>,
    /// Free-form background information.
    pub background_information: Option<String>,
    /// Arcade scoreboard level.
    pub scoreboard_level_id: Option<u64>,
    /// Groups the agent is a member of.
    pub member_of: Vec<u64>,
    /// Groups the agent observes.
    pub observer_of: Vec<u64>,
    /// Role assignments.
    pub roles: Vec<AgentRoleAssignment>,
    /// Last login.
    pub last_login_at: Option<Timestamp>,
    /// Last activity.
    pub last_active_at: Option<Timestamp>,
    /// Whether the agent ever logged in.
    pub has_logged_in: bool,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

impl Agent {
    /// Returns "First Last", falling back to the email.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone().unwrap_or_else(|| "Unknown".to_string())
        } else {
            name
        }
    }
}

/// One role granted to an agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRoleAssignment {
    /// The role granted.
    pub role_id: u64,
    /// `entire_helpdesk`, `member_groups`, `specified_groups` or `assigned_items`.
    pub assignment_scope: String,
    /// Groups the scope applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<u64>,
}

/// Collection returned by `GET agents`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Agents {
    /// The agents on this page.
    #[serde(default)]
    pub agents: Vec<Agent>,
}

/// Single-agent envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentEnvelope {
    /// The agent.
    pub agent: Agent,
}

/// Payload for `POST agents`. Fields mirror [`Agent`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAgentModel {
    /// First name (required).
    pub first_name: String,
    /// Primary email (required).
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub department_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoreboard_level_id: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_of: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observer_of: Vec<u64>,
    /// Role assignments (at least one is needed for a full agent).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<AgentRoleAssignment>,
}

impl CreateAgentModel {
    /// Creates a payload with the two required fields.
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Sets the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Adds a role assignment.
    pub fn with_role(mut self, role: AgentRoleAssignment) -> Self {
        self.roles.push(role);
        self
    }
}

/// Payload for `PUT agents/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAgentModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoreboard_level_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_of: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observer_of: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<AgentRoleAssignment>>,
}

/// Filters for `GET agents`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAgentsOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Exact email match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only active (`true`) or deactivated (`false`) agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// `fulltime` or `occasional`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ListAgentsOptions {
    /// Creates empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

/// A role that can be granted to agents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentRole {
    /// Unique role ID.
    pub id: u64,
    /// Role name.
    pub name: Option<String>,
    /// Role description.
    pub description: Option<String>,
    /// Whether this is a built-in role.
    pub default: bool,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET roles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentRoles {
    /// The roles on this page.
    #[serde(default)]
    pub roles: Vec<AgentRole>,
}

/// Single-role envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentRoleEnvelope {
    /// The role.
    pub role: AgentRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_display_name() {
        let agent = Agent {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            ..Agent::default()
        };
        assert_eq!(agent.display_name(), "Ada Lovelace");

        let agent = Agent {
            email: Some("ada@example.com".into()),
            ..Agent::default()
        };
        assert_eq!(agent.display_name(), "ada@example.com");
    }

    #[test]
    fn test_agent_decodes_nulls() {
        let json = r#"{
            "id": 12,
            "first_name": "Ada",
            "last_name": null,
            "reporting_manager_id": null,
            "roles": [{"role_id": 3, "assignment_scope": "entire_helpdesk", "groups": []}],
            "created_at": "2020-03-14T09:26:53Z"
        }"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.id, 12);
        assert!(agent.last_name.is_none());
        assert_eq!(agent.roles[0].role_id, 3);
        assert!(agent.created_at.is_some());
    }

    #[test]
    fn test_create_agent_skips_unset_fields() {
        let body = CreateAgentModel::new("Ada", "ada@example.com");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"first_name": "Ada", "email": "ada@example.com"}));
    }

    #[test]
    fn test_list_agents_query() {
        let opts = ListAgentsOptions::new().with_active(true);
        let query = serde_json::to_value(&opts).unwrap();
        assert_eq!(query, serde_json::json!({"active": true}));
    }
}
