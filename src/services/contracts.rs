//! Contracts, their approval workflow, and contract types.

use crate::client::{Client, Response, Result};
use crate::models::{
    AssociatedAssets, Contract, ContractEnvelope, ContractTypes, Contracts, CreateContractModel, ListOptions,
    UpdateContractModel,
};

use super::put_action;

/// Operations on `contracts` and `contract_types`.
#[derive(Debug, Clone, Copy)]
pub struct ContractService<'a> {
    client: &'a Client,
}

impl<'a> ContractService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a contract by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Contract>> {
        let response = self.client.get::<ContractEnvelope>(&format!("contracts/{}", id)).await?;
        Ok(response.map(|e| e.contract))
    }

    /// Lists contracts.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Contracts>> {
        self.client.list("contracts", opts).await
    }

    /// Creates a contract in draft.
    pub async fn create(&self, contract: &CreateContractModel) -> Result<Response<Contract>> {
        let response = self.client.post::<ContractEnvelope, _>("contracts", Some(contract)).await?;
        Ok(response.map(|e| e.contract))
    }

    /// Updates a contract.
    pub async fn update(&self, id: u64, contract: &UpdateContractModel) -> Result<Response<Contract>> {
        let response = self
            .client
            .put::<ContractEnvelope, _>(&format!("contracts/{}", id), Some(contract))
            .await?;
        Ok(response.map(|e| e.contract))
    }

    /// Sends a draft contract to its approver.
    pub async fn submit_for_approval(&self, id: u64) -> Result<Response<bool>> {
        self.operation(id, "submit-for-approval").await
    }

    /// Approves a pending contract.
    pub async fn approve(&self, id: u64) -> Result<Response<bool>> {
        self.operation(id, "approve").await
    }

    /// Rejects a pending contract.
    pub async fn reject(&self, id: u64) -> Result<Response<bool>> {
        self.operation(id, "reject").await
    }

    async fn operation(&self, id: u64, operation: &str) -> Result<Response<bool>> {
        put_action(self.client, &format!("contracts/{}?operation={}", id, operation)).await
    }

    /// Lists the assets a contract covers.
    pub async fn associated_assets(&self, id: u64) -> Result<Response<AssociatedAssets>> {
        self.client.get(&format!("contracts/{}/associated_assets", id)).await
    }

    /// Lists contract types.
    pub async fn list_types(&self) -> Result<Response<ContractTypes>> {
        self.client.get("contract_types").await
    }
}
