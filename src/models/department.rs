//! Department models.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A department (or company, in MSP mode).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    /// Department ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Department head.
    pub head_user_id: Option<u64>,
    /// Prime contact.
    pub prime_user_id: Option<u64>,
    /// Email domains mapped to this department.
    pub domains: Vec<String>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET departments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Departments {
    /// The departments on this page.
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// Single-department envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentEnvelope {
    /// The department.
    pub department: Department,
}

/// Payload for creating or updating a department. Fields mirror [`Department`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct DepartmentModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prime_user_id: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
}

impl DepartmentModel {
    /// Payload with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
