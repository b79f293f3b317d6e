//! Service catalog.

use crate::client::{Client, Response, Result};
use crate::models::{
    ListOptions, ListServiceItemsOptions, ServiceCategories, ServiceItem, ServiceItemEnvelope, ServiceItemSearch,
    ServiceItems,
};

/// Read operations on `service_catalog`.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCatalogService<'a> {
    client: &'a Client,
}

impl<'a> ServiceCatalogService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a catalog item by display ID.
    pub async fn get_item(&self, display_id: u64) -> Result<Response<ServiceItem>> {
        let response = self
            .client
            .get::<ServiceItemEnvelope>(&format!("service_catalog/items/{}", display_id))
            .await?;
        Ok(response.map(|e| e.service_item))
    }

    /// Lists catalog items, optionally within one category.
    pub async fn list_items(&self, opts: Option<&ListServiceItemsOptions>) -> Result<Response<ServiceItems>> {
        self.client.list("service_catalog/items", opts).await
    }

    /// Searches catalog items by name.
    pub async fn search_items(&self, search: &ServiceItemSearch) -> Result<Response<ServiceItems>> {
        self.client.list("service_catalog/items/search", Some(search)).await
    }

    /// Lists catalog categories.
    pub async fn list_categories(&self, opts: Option<&ListOptions>) -> Result<Response<ServiceCategories>> {
        self.client.list("service_catalog/categories", opts).await
    }
}
