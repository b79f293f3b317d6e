//! Requesters.

use crate::client::{Client, Response, Result};
use crate::models::{
    CreateRequesterModel, ListRequestersOptions, Requester, RequesterEnvelope, Requesters, UpdateRequesterModel,
};

/// Operations on `requesters`.
#[derive(Debug, Clone, Copy)]
pub struct RequesterService<'a> {
    client: &'a Client,
}

impl<'a> RequesterService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a requester by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Requester>> {
        let response = self
            .client
            .get::<RequesterEnvelope>(&format!("requesters/{}", id))
            .await?;
        Ok(response.map(|e| e.requester))
    }

    /// Lists requesters, optionally by email or including agents.
    pub async fn list(&self, opts: Option<&ListRequestersOptions>) -> Result<Response<Requesters>> {
        self.client.list("requesters", opts).await
    }

    /// Creates a requester.
    pub async fn create(&self, requester: &CreateRequesterModel) -> Result<Response<Requester>> {
        let response = self
            .client
            .post::<RequesterEnvelope, _>("requesters", Some(requester))
            .await?;
        Ok(response.map(|e| e.requester))
    }

    /// Updates a requester.
    pub async fn update(&self, id: u64, requester: &UpdateRequesterModel) -> Result<Response<Requester>> {
        let response = self
            .client
            .put::<RequesterEnvelope, _>(&format!("requesters/{}", id), Some(requester))
            .await?;
        Ok(response.map(|e| e.requester))
    }

    /// Permanently deletes a requester and their tickets.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("requesters/{}/forget", id)).await
    }

    /// Deactivates a requester.
    pub async fn deactivate(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("requesters/{}", id)).await
    }

    /// Reactivates a deactivated requester.
    pub async fn reactivate(&self, id: u64) -> Result<Response<Requester>> {
        let response = self
            .client
            .put::<RequesterEnvelope, ()>(&format!("requesters/{}/reactivate", id), None)
            .await?;
        Ok(response.map(|e| e.requester))
    }
}
