//! Business hours models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A business hours calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    /// Calendar ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Whether this is the account default.
    pub is_default: bool,
    /// Time zone name.
    pub time_zone: Option<String>,
    /// Holidays observed.
    pub list_of_holidays: Vec<Holiday>,
    /// Working hours keyed by weekday (`monday`, `tuesday`, ...).
    pub service_desk_hours: BTreeMap<String, Workday>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Opening hours for one weekday, as `HH:MM` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workday {
    /// Opening time.
    pub beginning_of_workday: String,
    /// Closing time.
    pub end_of_workday: String,
}

/// A named holiday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Holiday {
    /// Date, e.g. `Dec 25`.
    pub holiday_date: String,
    /// Name.
    pub holiday_name: String,
}

/// Collection returned by `GET business_hours`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessHoursCollection {
    /// The calendars on this page.
    #[serde(default)]
    pub business_hours: Vec<BusinessHours>,
}

/// Single-calendar envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessHoursEnvelope {
    /// The calendar.
    pub business_hours: BusinessHours,
}
