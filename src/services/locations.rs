//! Locations.

use crate::client::{Client, Response, Result};
use crate::models::{Location, LocationEnvelope, LocationModel, Locations, ListOptions};

/// Operations on `locations`.
#[derive(Debug, Clone, Copy)]
pub struct LocationService<'a> {
    client: &'a Client,
}

impl<'a> LocationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a location by ID, including its address.
    pub async fn get(&self, id: u64) -> Result<Response<Location>> {
        let response = self.client.get::<LocationEnvelope>(&format!("locations/{}", id)).await?;
        Ok(response.map(|e| e.location))
    }

    /// Lists locations.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Locations>> {
        self.client.list("locations", opts).await
    }

    /// Creates a location.
    pub async fn create(&self, location: &LocationModel) -> Result<Response<Location>> {
        let response = self.client.post::<LocationEnvelope, _>("locations", Some(location)).await?;
        Ok(response.map(|e| e.location))
    }

    /// Updates a location.
    pub async fn update(&self, id: u64, location: &LocationModel) -> Result<Response<Location>> {
        let response = self
            .client
            .put::<LocationEnvelope, _>(&format!("locations/{}", id), Some(location))
            .await?;
        Ok(response.map(|e| e.location))
    }

    /// Deletes a location.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("locations/{}", id)).await
    }
}
