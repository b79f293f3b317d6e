//! Purchase orders.

use crate::client::{Client, Response, Result};
use crate::models::{PurchaseOrder, PurchaseOrderEnvelope, PurchaseOrderModel, PurchaseOrders, ListOptions};

/// Operations on `purchase_orders`.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseOrderService<'a> {
    client: &'a Client,
}

impl<'a> PurchaseOrderService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a purchase order by ID.
    pub async fn get(&self, id: u64) -> Result<Response<PurchaseOrder>> {
        let response = self.client.get::<PurchaseOrderEnvelope>(&format!("purchase_orders/{}", id)).await?;
        Ok(response.map(|e| e.purchase_order))
    }

    /// Lists purchase orders.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<PurchaseOrders>> {
        self.client.list("purchase_orders", opts).await
    }

    /// Raises a purchase order against a vendor.
    pub async fn create(&self, purchase_order: &PurchaseOrderModel) -> Result<Response<PurchaseOrder>> {
        let response = self.client.post::<PurchaseOrderEnvelope, _>("purchase_orders", Some(purchase_order)).await?;
        Ok(response.map(|e| e.purchase_order))
    }

    /// Updates a purchase order.
    pub async fn update(&self, id: u64, purchase_order: &PurchaseOrderModel) -> Result<Response<PurchaseOrder>> {
        let response = self
            .client
            .put::<PurchaseOrderEnvelope, _>(&format!("purchase_orders/{}", id), Some(purchase_order))
            .await?;
        Ok(response.map(|e| e.purchase_order))
    }

    /// Deletes a purchase order.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("purchase_orders/{}", id)).await
    }
}
