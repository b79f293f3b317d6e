//! SLA policy models.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A service level agreement policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaPolicy {
    /// Policy ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Evaluation order.
    pub position: Option<u32>,
    /// Whether the policy is the fallback.
    pub is_default: bool,
    /// Whether the policy is enabled.
    pub active: bool,
    /// Whether the policy is deleted.
    pub deleted: bool,
    /// Response and resolution targets per priority.
    pub sla_targets: Vec<serde_json::Value>,
    /// Conditions the policy applies to.
    pub applicable_to: serde_json::Value,
    /// Escalation rules.
    pub escalation: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET sla_policies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlaPolicies {
    /// The policies.
    #[serde(default)]
    pub sla_policies: Vec<SlaPolicy>,
}
