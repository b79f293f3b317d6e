//! Problem models.

use serde::{Deserialize, Serialize};

use super::{Description, ListOptions, Timestamp};

/// A problem record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Problem {
    /// Problem ID.
    pub id: u64,
    /// Assigned agent.
    pub agent_id: Option<u64>,
    /// Requester.
    pub requester_id: Option<u64>,
    /// Assigned group.
    pub group_id: Option<u64>,
    /// HTML description.
    pub description: Option<String>,
    /// Plain-text description.
    pub description_text: Option<String>,
    /// Priority code, 1 (low) to 4 (urgent).
    pub priority: u32,
    /// Status code: 1 open, 2 change requested, 3 closed.
    pub status: u32,
    /// Impact code, 1 (low) to 3 (high).
    pub impact: u32,
    /// Whether a known error was recorded.
    pub known_error: bool,
    /// Subject line.
    pub subject: Option<String>,
    /// Due date.
    pub due_by: Option<Timestamp>,
    /// Department.
    pub department_id: Option<u64>,
    /// Category.
    pub category: Option<String>,
    /// Sub-category.
    pub sub_category: Option<String>,
    /// Item category.
    pub item_category: Option<String>,
    /// Root cause analysis.
    pub analysis_fields: ProblemAnalysis,
    /// Linked assets.
    pub assets: Vec<serde_json::Value>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Structured analysis attached to a problem.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_cause: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_symptom: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_impact: Option<Description>,
}

/// Collection returned by `GET problems`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Problems {
    /// The problems on this page.
    #[serde(default)]
    pub problems: Vec<Problem>,
}

/// Single-problem envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemEnvelope {
    /// The problem.
    pub problem: Problem,
}

/// Payload for `POST problems`. Fields mirror [`Problem`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProblemModel {
    pub requester_id: u64,
    pub subject: String,
    pub description: String,
    pub priority: u32,
    pub status: u32,
    pub impact: u32,
    pub due_by: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_fields: Option<ProblemAnalysis>,
}

/// Payload for `PUT problems/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProblemModel {
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
    pub impact: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_fields: Option<ProblemAnalysis>,
}

/// Filters for `GET problems`.
pub type ListProblemsOptions = ListOptions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_fields_roundtrip_shape() {
        let json = r#"{"problem": {"id": 2, "subject": "Mail outage", "known_error": true,
            "analysis_fields": {"problem_cause": {"description": "Expired cert"}}}}"#;
        let envelope: ProblemEnvelope = serde_json::from_str(json).unwrap();
        let cause = envelope.problem.analysis_fields.problem_cause.unwrap();
        assert_eq!(cause.description.as_deref(), Some("Expired cert"));
        assert!(envelope.problem.analysis_fields.problem_symptom.is_none());
    }
}
