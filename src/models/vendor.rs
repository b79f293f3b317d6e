//! Vendor models.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A supplier of assets, software or contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    /// Vendor ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Primary contact at the vendor.
    pub primary_contact_id: Option<u64>,
    /// Postal address.
    pub address: VendorAddress,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Postal address of a vendor.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

/// Collection returned by `GET vendors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vendors {
    /// The vendors on this page.
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

/// Single-vendor envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorEnvelope {
    /// The vendor.
    pub vendor: Vendor,
}

/// Payload for creating or updating a vendor. Fields mirror [`Vendor`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct VendorModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<VendorAddress>,
}
