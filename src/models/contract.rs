//! Contract models.
//!
//! Contracts move through an approval workflow driven by
//! `PUT contracts/{id}?operation=...`.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A vendor contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contract {
    /// Contract ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Human-readable contract number.
    pub contract_number: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Vendor.
    pub vendor_id: Option<u64>,
    /// Approving agent.
    pub approver_id: Option<u64>,
    /// Total cost.
    pub cost: Option<f64>,
    /// `active`, `draft`, `pending_approval`, `expired`, ...
    pub status: Option<String>,
    /// Contract start.
    pub start_date: Option<Timestamp>,
    /// Contract end.
    pub end_date: Option<Timestamp>,
    /// Contract type.
    pub contract_type_id: Option<u64>,
    /// Whether the contract renews automatically.
    pub auto_renew: bool,
    /// Whether to notify before expiry.
    pub notify_expiry: bool,
    /// Days before expiry to notify.
    pub notify_before: Option<u32>,
    /// Responsible agent.
    pub owner_id: Option<u64>,
    /// Visible to these groups.
    pub visible_to_id: Option<u64>,
    /// Addresses notified on expiry.
    pub notify_to: Vec<String>,
    /// Line items.
    pub item_cost_details: Vec<ItemCostDetail>,
    /// Tenant-defined fields.
    pub custom_fields: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// One line item of a contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCostDetail {
    /// Line ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Item name.
    pub item_name: String,
    /// `per_unit` or `fixed`.
    pub pricing_model: String,
    /// Unit cost.
    pub cost: f64,
    /// Units covered.
    pub count: u32,
    /// Free-form comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Collection returned by `GET contracts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contracts {
    /// The contracts on this page.
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

/// Single-contract envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractEnvelope {
    /// The contract.
    pub contract: Contract,
}

/// Payload for `POST contracts`. Fields mirror [`Contract`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateContractModel {
    pub name: String,
    pub contract_number: String,
    pub contract_type_id: u64,
    pub approver_id: u64,
    pub cost: f64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_expiry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_before: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notify_to: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub item_cost_details: Vec<ItemCostDetail>,
}

/// Payload for `PUT contracts/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContractModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_expiry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_before: Option<u32>,
}

/// Assets covered by a contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociatedAssets {
    /// Covered assets, as returned by the API.
    #[serde(default)]
    pub associated_assets: Vec<serde_json::Value>,
}

/// A contract type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractType {
    /// Type ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Whether the type ships with the account.
    pub is_default: bool,
}

/// Collection returned by `GET contract_types`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractTypes {
    /// The contract types.
    #[serde(default)]
    pub contract_types: Vec<ContractType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_with_items() {
        let json = r#"{"contract": {"id": 3, "name": "Adobe", "status": "active", "cost": 1200.5,
            "item_cost_details": [{"id": 1, "item_name": "License", "pricing_model": "per_unit", "cost": 10.0, "count": 120}]}}"#;
        let envelope: ContractEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.contract.cost, Some(1200.5));
        assert_eq!(envelope.contract.item_cost_details[0].count, 120);
    }
}
