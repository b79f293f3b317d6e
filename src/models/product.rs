//! Product catalog models.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A product in the asset catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Product ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Asset type the product belongs to.
    pub asset_type_id: Option<u64>,
    /// Manufacturer.
    pub manufacturer: Option<String>,
    /// `In Production`, `In Pipeline` or `Retired`.
    pub status: Option<String>,
    /// `capex` or `opex`.
    pub mode_of_procurement: Option<String>,
    /// Depreciation schedule.
    pub depreciation_type_id: Option<u64>,
    /// Description.
    pub description: Option<String>,
    /// Plain-text description.
    pub description_text: Option<String>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Products {
    /// The products on this page.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Single-product envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    /// The product.
    pub product: Product,
}

/// Payload for creating or updating a product. Fields mirror [`Product`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_of_procurement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depreciation_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
