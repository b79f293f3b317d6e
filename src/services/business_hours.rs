//! Business hours calendars.

use crate::client::{Client, Response, Result};
use crate::models::{BusinessHours, BusinessHoursCollection, BusinessHoursEnvelope, ListOptions};

/// Read-only operations on `business_hours`.
#[derive(Debug, Clone, Copy)]
pub struct BusinessHoursService<'a> {
    client: &'a Client,
}

impl<'a> BusinessHoursService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a calendar by ID.
    pub async fn get(&self, id: u64) -> Result<Response<BusinessHours>> {
        let response = self
            .client
            .get::<BusinessHoursEnvelope>(&format!("business_hours/{}", id))
            .await?;
        Ok(response.map(|e| e.business_hours))
    }

    /// Lists calendars.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<BusinessHoursCollection>> {
        self.client.list("business_hours", opts).await
    }
}
