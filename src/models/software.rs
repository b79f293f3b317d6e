//! Software (application) models, with installations and licensed users.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A managed application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    /// Application ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// `desktop`, `saas` or `mobile`.
    pub application_type: Option<String>,
    /// `managed`, `ignored`, `restricted` or `disabled`.
    pub status: Option<String>,
    /// Publisher (a vendor ID).
    pub publisher_id: Option<u64>,
    /// Managing agent.
    pub managed_by_id: Option<u64>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Category.
    pub category: Option<String>,
    /// Where the application was discovered.
    pub source: Option<String>,
    /// Number of users.
    pub user_count: Option<u64>,
    /// Number of installations.
    pub installation_count: Option<u64>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET applications`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Applications {
    /// The applications on this page.
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Single-application envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationEnvelope {
    /// The application.
    pub application: Application,
}

/// Payload for creating or updating an application. Fields mirror [`Application`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A device the application is installed on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareInstallation {
    /// Row ID.
    pub id: u64,
    /// Device (asset display ID).
    pub installation_machine_id: Option<u64>,
    /// Installed path on the device.
    pub installation_path: Option<String>,
    /// Installed version.
    pub version: Option<String>,
    /// User of the device.
    pub user_id: Option<u64>,
    /// Department of the user.
    pub department_id: Option<u64>,
    /// When it was installed.
    pub installation_date: Option<Timestamp>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET applications/{id}/installations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoftwareInstallations {
    /// The installations on this page.
    #[serde(default)]
    pub installations: Vec<SoftwareInstallation>,
}

/// Envelope for a recorded installation.
#[derive(Debug, Clone, Deserialize)]
pub struct SoftwareInstallationEnvelope {
    /// The installation.
    pub installation: SoftwareInstallation,
}

/// Payload for `POST applications/{id}/installations`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInstallationModel {
    pub installation_machine_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<Timestamp>,
}

/// A user assigned a license for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareUser {
    /// Row ID.
    #[serde(skip_serializing_if = "is_zero_id")]
    pub id: u64,
    /// The user.
    pub user_id: u64,
    /// License assigned, if tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_id: Option<u64>,
    /// When the license was assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_date: Option<Timestamp>,
    /// First use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_used: Option<Timestamp>,
    /// Most recent use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<Timestamp>,
    /// Where the assignment came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

fn is_zero_id(id: &u64) -> bool {
    *id == 0
}

impl SoftwareUser {
    /// A binding of `user_id` with nothing else set, for bulk writes.
    pub fn for_user(user_id: u64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }
}

/// Collection returned by `GET applications/{id}/users`, and the body for
/// bulk add and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoftwareUsers {
    /// The license bindings.
    #[serde(default)]
    pub application_users: Vec<SoftwareUser>,
}

impl From<Vec<SoftwareUser>> for SoftwareUsers {
    fn from(application_users: Vec<SoftwareUser>) -> Self {
        Self { application_users }
    }
}

/// Single-binding envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SoftwareUserEnvelope {
    /// The binding.
    pub application_user: SoftwareUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_body_shape() {
        let body = SoftwareUsers::from(vec![SoftwareUser::for_user(11), SoftwareUser::for_user(12)]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"application_users": [{"user_id": 11}, {"user_id": 12}]})
        );
    }
}
