//! Asset, asset type, component and asset contract models.
//!
//! Assets are addressed by their `display_id`, not their internal `id`.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A configuration item in the CMDB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// Internal ID.
    pub id: u64,
    /// The ID used in URLs.
    pub display_id: u64,
    /// Asset name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Asset type.
    pub asset_type_id: Option<u64>,
    /// Asset tag.
    pub asset_tag: Option<String>,
    /// `low`, `medium` or `high`.
    pub impact: Option<String>,
    /// Who created the asset record.
    pub author_type: Option<String>,
    /// `permanent` or `loaner`.
    pub usage_type: Option<String>,
    /// Assigned user.
    pub user_id: Option<u64>,
    /// Location.
    pub location_id: Option<u64>,
    /// Department.
    pub department_id: Option<u64>,
    /// Managing agent.
    pub agent_id: Option<u64>,
    /// Managing group.
    pub group_id: Option<u64>,
    /// When the asset was assigned.
    pub assigned_on: Option<Timestamp>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET assets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Assets {
    /// The assets on this page.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Single-asset envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetEnvelope {
    /// The asset.
    pub asset: Asset,
}

/// Payload for creating or updating an asset. Fields mirror [`Asset`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_on: Option<Timestamp>,
}

impl AssetModel {
    /// Creates a payload for a new asset of the given type.
    pub fn new(name: impl Into<String>, asset_type_id: u64) -> Self {
        Self {
            name: Some(name.into()),
            asset_type_id: Some(asset_type_id),
            ..Self::default()
        }
    }
}

/// A hardware or software component discovered on an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetComponent {
    /// Component ID.
    pub id: u64,
    /// e.g. `Processor`, `Memory`, `Disk`.
    pub component_type: Option<String>,
    /// Type-specific attributes.
    pub component_data: serde_json::Value,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET assets/{id}/components`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetComponents {
    /// The components.
    #[serde(default)]
    pub components: Vec<AssetComponent>,
}

/// A contract covering an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetContract {
    /// Row ID.
    pub id: u64,
    /// Contract display number.
    pub contract_id: Option<String>,
    /// Contract type name.
    pub contract_type: Option<String>,
    /// Contract name.
    pub contract_name: Option<String>,
    /// Contract status.
    pub contract_status: Option<String>,
}

/// Collection returned by `GET assets/{id}/contracts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetContracts {
    /// The contracts.
    #[serde(default)]
    pub contracts: Vec<AssetContract>,
}

/// A CMDB asset type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetType {
    /// Asset type ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Parent type, if nested.
    pub parent_asset_type_id: Option<u64>,
    /// Whether the type is visible.
    pub visible: bool,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET asset_types`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetTypes {
    /// The asset types on this page.
    #[serde(default)]
    pub asset_types: Vec<AssetType>,
}

/// Single-asset-type envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetTypeEnvelope {
    /// The asset type.
    pub asset_type: AssetType,
}

/// Payload for `POST asset_types`. Fields mirror [`AssetType`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAssetTypeModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Required by the API for anything below the top level.
    pub parent_asset_type_id: u64,
}

/// Payload for `PUT asset_types/{id}`. Fields mirror [`AssetType`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAssetTypeModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}
