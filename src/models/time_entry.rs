//! Time entry models shared by tickets, problems and releases.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Time logged against a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntry {
    /// Entry ID.
    pub id: u64,
    /// When the timer started.
    pub start_time: Option<Timestamp>,
    /// When the work happened.
    pub executed_at: Option<Timestamp>,
    /// Whether the timer is still running.
    pub timer_running: bool,
    /// Whether the time is billable.
    pub billable: bool,
    /// Duration as `hh:mm`.
    pub time_spent: Option<String>,
    /// Task the time was spent on.
    pub task_id: Option<u64>,
    /// Agent who logged it.
    pub agent_id: Option<u64>,
    /// Free-form note.
    pub note: Option<String>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET .../time_entries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeEntries {
    /// The entries.
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

/// Single-entry envelope. Also the request wrapper for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryEnvelope<T = TimeEntry> {
    /// The entry.
    pub time_entry: T,
}

/// Payload for logging time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTimeEntryModel {
    /// Agent the time belongs to.
    pub agent_id: u64,
    /// Duration as `hh:mm`.
    pub time_spent: String,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether the time is billable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

impl CreateTimeEntryModel {
    /// Creates an entry of `time_spent` (`hh:mm`) for `agent_id`.
    pub fn new(agent_id: u64, time_spent: impl Into<String>) -> Self {
        Self {
            agent_id,
            time_spent: time_spent.into(),
            ..Self::default()
        }
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_is_wrapped() {
        let body = TimeEntryEnvelope {
            time_entry: CreateTimeEntryModel::new(4, "01:30").with_note("RCA"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"time_entry": {"agent_id": 4, "time_spent": "01:30", "note": "RCA"}})
        );
    }
}
