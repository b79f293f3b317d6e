//! Purchase order models.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A purchase order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrder {
    /// Order ID.
    pub id: u64,
    /// Vendor supplying the items.
    pub vendor_id: Option<u64>,
    /// Name.
    pub name: Option<String>,
    /// Human-readable order number.
    pub po_number: Option<String>,
    /// Vendor's reference.
    pub vendor_details: Option<String>,
    /// Expected delivery.
    pub expected_delivery_date: Option<Timestamp>,
    /// Ordered items.
    pub purchase_items: Vec<PurchaseItem>,
    /// Ship-to address.
    pub shipping_address: Option<String>,
    /// Bill-to address.
    pub billing_address: Option<String>,
    /// ISO currency code.
    pub currency_code: Option<String>,
    /// Department charged.
    pub department_id: Option<u64>,
    /// Discount percentage.
    pub discount_percentage: Option<f64>,
    /// Tax percentage.
    pub tax_percentage: Option<f64>,
    /// Shipping cost.
    pub shipping_cost: Option<f64>,
    /// Total cost.
    pub total_cost: Option<f64>,
    /// Order status code.
    pub status: Option<u32>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// One ordered item.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseItem {
    /// `1` for hardware, `2` for software, `3` for consumable.
    pub item_type: u32,
    pub item_id: u64,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cost: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<f64>,
}

/// Collection returned by `GET purchase_orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseOrders {
    /// The purchase orders on this page.
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
}

/// Single-order envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseOrderEnvelope {
    /// The purchase order.
    pub purchase_order: PurchaseOrder,
}

/// Payload for creating or updating a purchase order. Fields mirror [`PurchaseOrder`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurchaseOrderModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub purchase_items: Vec<PurchaseItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
}
