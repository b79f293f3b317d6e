//! Product catalog.
//!
//! Products are the make and model entries assets are created from.

use crate::client::{Client, Response, Result};
use crate::models::{Product, ProductEnvelope, ProductModel, Products, ListOptions};

/// Operations on `products`.
#[derive(Debug, Clone, Copy)]
pub struct ProductService<'a> {
    client: &'a Client,
}

impl<'a> ProductService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a product by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Product>> {
        let response = self.client.get::<ProductEnvelope>(&format!("products/{}", id)).await?;
        Ok(response.map(|e| e.product))
    }

    /// Lists products.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Products>> {
        self.client.list("products", opts).await
    }

    /// Creates a product.
    pub async fn create(&self, product: &ProductModel) -> Result<Response<Product>> {
        let response = self.client.post::<ProductEnvelope, _>("products", Some(product)).await?;
        Ok(response.map(|e| e.product))
    }

    /// Updates a product.
    pub async fn update(&self, id: u64, product: &ProductModel) -> Result<Response<Product>> {
        let response = self
            .client
            .put::<ProductEnvelope, _>(&format!("products/{}", id), Some(product))
            .await?;
        Ok(response.map(|e| e.product))
    }

    /// Deletes a product.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("products/{}", id)).await
    }
}
