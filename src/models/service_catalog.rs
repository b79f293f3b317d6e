//! Service catalog models.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// An orderable item in the service catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    /// Internal ID.
    pub id: u64,
    /// The ID used in URLs.
    pub display_id: u64,
    /// Name.
    pub name: Option<String>,
    /// HTML description.
    pub description: Option<String>,
    /// One-line summary.
    pub short_description: Option<String>,
    /// Category.
    pub category_id: Option<u64>,
    /// Delivery estimate in hours.
    pub delivery_time: Option<u64>,
    /// Price shown to requesters.
    pub cost: Option<String>,
    /// Whether the price is shown.
    pub cost_visibility: bool,
    /// Whether the delivery time is shown.
    pub delivery_time_visibility: bool,
    /// Whether the item appears in the portal.
    pub visibility: Option<u32>,
    /// Whether the item is deleted.
    pub deleted: bool,
    /// Form fields shown when ordering.
    pub custom_fields: Vec<serde_json::Value>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET service_catalog/items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceItems {
    /// The items on this page.
    #[serde(default)]
    pub service_items: Vec<ServiceItem>,
}

/// Single-item envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceItemEnvelope {
    /// The item.
    pub service_item: ServiceItem,
}

/// A service catalog category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategory {
    /// Category ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Sort order.
    pub position: Option<u32>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET service_catalog/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceCategories {
    /// The categories.
    #[serde(default)]
    pub service_categories: Vec<ServiceCategory>,
}

/// Filters for `GET service_catalog/items`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListServiceItemsOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Only items in this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// Query for `GET service_catalog/items/search`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceItemSearch {
    /// Text to match against item names.
    pub search_term: String,
    /// Limit results to items visible to this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl ServiceItemSearch {
    /// Searches for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            user_email: None,
        }
    }
}
