//! Announcements.

use crate::client::{Client, Response, Result};
use crate::models::{Announcement, AnnouncementEnvelope, AnnouncementModel, Announcements, ListAnnouncementsOptions};

/// Operations on `announcements`.
#[derive(Debug, Clone, Copy)]
pub struct AnnouncementService<'a> {
    client: &'a Client,
}

impl<'a> AnnouncementService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets an announcement by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Announcement>> {
        let response = self
            .client
            .get::<AnnouncementEnvelope>(&format!("announcements/{}", id))
            .await?;
        Ok(response.map(|e| e.announcement))
    }

    /// Lists announcements, optionally by state (`active`, `archived`, `scheduled`).
    pub async fn list(&self, opts: Option<&ListAnnouncementsOptions>) -> Result<Response<Announcements>> {
        self.client.list("announcements", opts).await
    }

    /// Publishes an announcement.
    pub async fn create(&self, announcement: &AnnouncementModel) -> Result<Response<Announcement>> {
        let response = self
            .client
            .post::<AnnouncementEnvelope, _>("announcements", Some(announcement))
            .await?;
        Ok(response.map(|e| e.announcement))
    }

    /// Updates an announcement.
    pub async fn update(&self, id: u64, announcement: &AnnouncementModel) -> Result<Response<Announcement>> {
        let response = self
            .client
            .put::<AnnouncementEnvelope, _>(&format!("announcements/{}", id), Some(announcement))
            .await?;
        Ok(response.map(|e| e.announcement))
    }

    /// Deletes an announcement.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("announcements/{}", id)).await
    }
}
