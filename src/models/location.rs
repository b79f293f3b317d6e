//! Location models.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A physical location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Location ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Enclosing location.
    pub parent_location_id: Option<u64>,
    /// Primary contact.
    pub primary_contact_id: Option<u64>,
    /// Postal address.
    pub address: Address,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Postal address of a location.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

/// Collection returned by `GET locations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Locations {
    /// The locations on this page.
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// Single-location envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEnvelope {
    /// The location.
    pub location: Location,
}

/// Payload for creating or updating a location. Fields mirror [`Location`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_model_nested_address() {
        let model = LocationModel {
            name: Some("HQ".to_string()),
            address: Some(Address {
                city: Some("Chennai".to_string()),
                ..Address::default()
            }),
            ..LocationModel::default()
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json, serde_json::json!({"name": "HQ", "address": {"city": "Chennai"}}));
    }
}
