//! Vendors.

use crate::client::{Client, Response, Result};
use crate::models::{Vendor, VendorEnvelope, VendorModel, Vendors, ListOptions};

/// Operations on `vendors`.
#[derive(Debug, Clone, Copy)]
pub struct VendorService<'a> {
    client: &'a Client,
}

impl<'a> VendorService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a vendor by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Vendor>> {
        let response = self.client.get::<VendorEnvelope>(&format!("vendors/{}", id)).await?;
        Ok(response.map(|e| e.vendor))
    }

    /// Lists vendors.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Vendors>> {
        self.client.list("vendors", opts).await
    }

    /// Creates a vendor.
    pub async fn create(&self, vendor: &VendorModel) -> Result<Response<Vendor>> {
        let response = self.client.post::<VendorEnvelope, _>("vendors", Some(vendor)).await?;
        Ok(response.map(|e| e.vendor))
    }

    /// Updates a vendor.
    pub async fn update(&self, id: u64, vendor: &VendorModel) -> Result<Response<Vendor>> {
        let response = self
            .client
            .put::<VendorEnvelope, _>(&format!("vendors/{}", id), Some(vendor))
            .await?;
        Ok(response.map(|e| e.vendor))
    }

    /// Deletes a vendor.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("vendors/{}", id)).await
    }
}
