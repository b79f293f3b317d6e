//! Software applications, their installations and licensed users.

use crate::client::{Client, Response, Result};
use crate::models::{
    Application, ApplicationEnvelope, ApplicationModel, Applications, CreateInstallationModel, ListOptions,
    SoftwareInstallation, SoftwareInstallationEnvelope, SoftwareInstallations, SoftwareUser, SoftwareUserEnvelope,
    SoftwareUsers,
};

use super::join_ids;

/// Operations on `applications`.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareService<'a> {
    client: &'a Client,
}

impl<'a> SoftwareService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets an application by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Application>> {
        let response = self
            .client
            .get::<ApplicationEnvelope>(&format!("applications/{}", id))
            .await?;
        Ok(response.map(|e| e.application))
    }

    /// Lists applications.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Applications>> {
        self.client.list("applications", opts).await
    }

    /// Creates an application.
    pub async fn create(&self, application: &ApplicationModel) -> Result<Response<Application>> {
        let response = self
            .client
            .post::<ApplicationEnvelope, _>("applications", Some(application))
            .await?;
        Ok(response.map(|e| e.application))
    }

    /// Updates an application.
    pub async fn update(&self, id: u64, application: &ApplicationModel) -> Result<Response<Application>> {
        let response = self
            .client
            .put::<ApplicationEnvelope, _>(&format!("applications/{}", id), Some(application))
            .await?;
        Ok(response.map(|e| e.application))
    }

    /// Deletes an application.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("applications/{}", id)).await
    }

    /// Records an installation of the application on a device.
    pub async fn add_installation(
        &self,
        application_id: u64,
        installation: &CreateInstallationModel,
    ) -> Result<Response<SoftwareInstallation>> {
        let response = self
            .client
            .post::<SoftwareInstallationEnvelope, _>(
                &format!("applications/{}/installations", application_id),
                Some(installation),
            )
            .await?;
        Ok(response.map(|e| e.installation))
    }

    /// Lists the devices the application is installed on.
    pub async fn list_installations(
        &self,
        application_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Response<SoftwareInstallations>> {
        self.client
            .list(&format!("applications/{}/installations", application_id), opts)
            .await
    }

    /// Removes the installations on the given devices.
    pub async fn delete_installations<I>(&self, application_id: u64, device_ids: I) -> Result<Response<bool>>
    where
        I: IntoIterator<Item = u64>,
    {
        self.client
            .delete(&format!(
                "applications/{}/installations?device_ids={}",
                application_id,
                join_ids(device_ids)
            ))
            .await
    }

    /// Gets one license binding.
    pub async fn get_user(&self, application_id: u64, id: u64) -> Result<Response<SoftwareUser>> {
        let response = self
            .client
            .get::<SoftwareUserEnvelope>(&format!("applications/{}/users/{}", application_id, id))
            .await?;
        Ok(response.map(|e| e.application_user))
    }

    /// Lists the users holding a license for the application.
    pub async fn list_users(&self, application_id: u64, opts: Option<&ListOptions>) -> Result<Response<SoftwareUsers>> {
        self.client
            .list(&format!("applications/{}/users", application_id), opts)
            .await
    }

    /// Adds license bindings in bulk.
    pub async fn add_users(&self, application_id: u64, users: &SoftwareUsers) -> Result<Response<SoftwareUsers>> {
        self.client
            .post(&format!("applications/{}/users", application_id), Some(users))
            .await
    }

    /// Updates license bindings in bulk.
    pub async fn update_users(&self, application_id: u64, users: &SoftwareUsers) -> Result<Response<SoftwareUsers>> {
        self.client
            .put(&format!("applications/{}/users", application_id), Some(users))
            .await
    }

    /// Removes the license bindings of the given users.
    pub async fn delete_users<I>(&self, application_id: u64, user_ids: I) -> Result<Response<bool>>
    where
        I: IntoIterator<Item = u64>,
    {
        self.client
            .delete(&format!(
                "applications/{}/users?user_ids={}",
                application_id,
                join_ids(user_ids)
            ))
            .await
    }
}
