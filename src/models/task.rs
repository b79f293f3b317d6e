//! Task models shared by tickets, problems and releases.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Task status codes.
pub mod status {
    /// Not started.
    pub const OPEN: u32 = 1;
    /// Being worked on.
    pub const IN_PROGRESS: u32 = 2;
    /// Done.
    pub const COMPLETED: u32 = 3;
}

/// A task attached to a ticket, problem or release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Task ID.
    pub id: u64,
    /// Assigned agent.
    pub agent_id: Option<u64>,
    /// See [`status`].
    pub status: u32,
    /// Due date.
    pub due_date: Option<Timestamp>,
    /// Reminder lead time in seconds.
    pub notify_before: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Assigned group.
    pub group_id: Option<u64>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
    /// Completion time.
    pub closed_at: Option<Timestamp>,
}

/// Collection returned by `GET .../tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tasks {
    /// The tasks on this page.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Single-task envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEnvelope {
    /// The task.
    pub task: Task,
}

/// Payload for creating a task. Fields mirror [`Task`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTaskModel {
    pub title: String,
    pub description: String,
    pub due_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_before: Option<u64>,
}

/// Payload for updating a task. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_before: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
}

impl UpdateTaskModel {
    /// An update that only marks the task completed.
    pub fn completed() -> Self {
        Self {
            status: Some(status::COMPLETED),
            ..Self::default()
        }
    }
}
