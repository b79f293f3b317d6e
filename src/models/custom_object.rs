//! Custom object models.
//!
//! A custom object is a tenant-defined table. Its schema is described by
//! [`CustomObject`]; the rows are [`CustomObjectRecord`]s whose keys depend
//! on that schema, so they are kept as free-form JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Timestamp;

/// Schema of a custom object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomObject {
    /// Object ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Column definitions.
    pub fields: Vec<Field>,
    /// Last updater.
    pub updated_by: Option<Value>,
    /// Last update time.
    pub last_updated_at: Option<Timestamp>,
}

/// A column of a custom object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Field ID.
    pub id: Option<String>,
    /// Key used in record data.
    pub name: Option<String>,
    /// Display label.
    pub label: Option<String>,
    /// Field type, e.g. `TEXT` or `DROPDOWN`.
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    /// Whether the field must be set.
    pub required: bool,
    /// Type-specific settings.
    pub field_meta: FieldMeta,
    /// Allowed values for choice fields.
    pub choices: Vec<Value>,
}

/// Type-specific field settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMeta {
    /// Whether values must be unique.
    pub unique: bool,
    /// Whether the field is the display name.
    pub primary: bool,
}

/// Collection returned by `GET objects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomObjects {
    /// The object schemas.
    #[serde(default)]
    pub custom_objects: Vec<CustomObject>,
}

/// Single-object envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomObjectEnvelope {
    /// The object schema.
    pub custom_object: CustomObject,
}

/// One row of a custom object.
pub type CustomObjectRecord = Map<String, Value>;

/// Request body for creating or updating a record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordModel {
    /// Field values keyed by field name.
    pub data: CustomObjectRecord,
}

impl RecordModel {
    /// Creates an empty record body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }
}

impl From<CustomObjectRecord> for RecordModel {
    fn from(data: CustomObjectRecord) -> Self {
        Self { data }
    }
}

/// Envelope for a written record.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomObjectRecordEnvelope {
    /// The stored record.
    pub custom_object: CustomObjectRecord,
}

/// Page of records returned by `GET objects/{id}/records`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomObjectRecords {
    /// The records on this page.
    pub records: Vec<CustomObjectRecord>,
    /// Link to the next page, if any.
    pub next_page_link: Option<String>,
    /// Paging metadata.
    pub meta: Option<Value>,
}

impl CustomObjectRecords {
    /// Whether another page exists.
    pub fn has_next_page(&self) -> bool {
        self.next_page_link.as_deref().is_some_and(|link| !link.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_model_wraps_data() {
        let body = RecordModel::new().with_field("bo_display_id", 7).with_field("name", "Fleet");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"data": {"bo_display_id": 7, "name": "Fleet"}}));
    }

    #[test]
    fn test_records_page() {
        let json = r#"{"records": [{"bo_display_id": 1, "name": "Van"}],
            "next_page_link": "/api/v2/objects/5/records?page_size=1&next_page_token=abc",
            "meta": {"total_records_count": 2}}"#;
        let page: CustomObjectRecords = serde_json::from_str(json).unwrap();
        assert_eq!(page.records[0]["name"], "Van");
        assert!(page.has_next_page());

        let last: CustomObjectRecords = serde_json::from_str(r#"{"records": []}"#).unwrap();
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_field_type_rename() {
        let json = r#"{"custom_object": {"id": 5, "name": "Vehicles",
            "fields": [{"name": "plate", "label": "Plate", "type": "TEXT", "required": true,
            "field_meta": {"unique": true}}]}}"#;
        let envelope: CustomObjectEnvelope = serde_json::from_str(json).unwrap();
        let field = &envelope.custom_object.fields[0];
        assert_eq!(field.field_type.as_deref(), Some("TEXT"));
        assert!(field.field_meta.unique);
    }
}
