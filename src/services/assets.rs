//! Assets, their components and contracts, and asset types.
//!
//! Assets are addressed by `display_id`.

use crate::client::{Client, Response, Result};
use crate::models::{
    Asset, AssetComponents, AssetContracts, AssetEnvelope, AssetModel, AssetType, AssetTypeEnvelope, AssetTypes,
    Assets, CreateAssetTypeModel, ListOptions, UpdateAssetTypeModel,
};

use super::put_action;

/// Operations on `assets` and `asset_types`.
#[derive(Debug, Clone, Copy)]
pub struct AssetService<'a> {
    client: &'a Client,
}

impl<'a> AssetService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets an asset by display ID.
    pub async fn get(&self, display_id: u64) -> Result<Response<Asset>> {
        let response = self
            .client
            .get::<AssetEnvelope>(&format!("assets/{}", display_id))
            .await?;
        Ok(response.map(|e| e.asset))
    }

    /// Lists assets.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Assets>> {
        self.client.list("assets", opts).await
    }

    /// Creates an asset.
    pub async fn create(&self, asset: &AssetModel) -> Result<Response<Asset>> {
        let response = self.client.post::<AssetEnvelope, _>("assets", Some(asset)).await?;
        Ok(response.map(|e| e.asset))
    }

    /// Updates an asset.
    pub async fn update(&self, display_id: u64, asset: &AssetModel) -> Result<Response<Asset>> {
        let response = self
            .client
            .put::<AssetEnvelope, _>(&format!("assets/{}", display_id), Some(asset))
            .await?;
        Ok(response.map(|e| e.asset))
    }

    /// Moves an asset to the trash. It can be brought back with [`restore`](Self::restore).
    pub async fn trash(&self, display_id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("assets/{}", display_id)).await
    }

    /// Restores a trashed asset.
    pub async fn restore(&self, display_id: u64) -> Result<Response<bool>> {
        put_action(self.client, &format!("assets/{}/restore", display_id)).await
    }

    /// Permanently deletes a trashed asset.
    pub async fn delete_forever(&self, display_id: u64) -> Result<Response<bool>> {
        put_action(self.client, &format!("assets/{}/delete_forever", display_id)).await
    }

    /// Lists the hardware and software components of an asset.
    pub async fn list_components(&self, display_id: u64) -> Result<Response<AssetComponents>> {
        self.client.get(&format!("assets/{}/components", display_id)).await
    }

    /// Lists the contracts covering an asset.
    pub async fn list_contracts(&self, display_id: u64) -> Result<Response<AssetContracts>> {
        self.client.get(&format!("assets/{}/contracts", display_id)).await
    }

    /// Gets an asset type by ID.
    pub async fn get_type(&self, id: u64) -> Result<Response<AssetType>> {
        let response = self
            .client
            .get::<AssetTypeEnvelope>(&format!("asset_types/{}", id))
            .await?;
        Ok(response.map(|e| e.asset_type))
    }

    /// Lists asset types.
    pub async fn list_types(&self, opts: Option<&ListOptions>) -> Result<Response<AssetTypes>> {
        self.client.list("asset_types", opts).await
    }

    /// Creates an asset type.
    pub async fn create_type(&self, asset_type: &CreateAssetTypeModel) -> Result<Response<AssetType>> {
        let response = self
            .client
            .post::<AssetTypeEnvelope, _>("asset_types", Some(asset_type))
            .await?;
        Ok(response.map(|e| e.asset_type))
    }

    /// Updates an asset type.
    pub async fn update_type(&self, id: u64, asset_type: &UpdateAssetTypeModel) -> Result<Response<AssetType>> {
        let response = self
            .client
            .put::<AssetTypeEnvelope, _>(&format!("asset_types/{}", id), Some(asset_type))
            .await?;
        Ok(response.map(|e| e.asset_type))
    }

    /// Deletes an asset type.
    pub async fn delete_type(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("asset_types/{}", id)).await
    }
}
