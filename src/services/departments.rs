//! Departments.

use crate::client::{Client, Response, Result};
use crate::models::{Department, DepartmentEnvelope, DepartmentModel, Departments, ListOptions};

/// Operations on `departments`.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentService<'a> {
    client: &'a Client,
}

impl<'a> DepartmentService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a department by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Department>> {
        let response = self.client.get::<DepartmentEnvelope>(&format!("departments/{}", id)).await?;
        Ok(response.map(|e| e.department))
    }

    /// Lists departments (companies, for MSP accounts).
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<Departments>> {
        self.client.list("departments", opts).await
    }

    /// Creates a department.
    pub async fn create(&self, department: &DepartmentModel) -> Result<Response<Department>> {
        let response = self.client.post::<DepartmentEnvelope, _>("departments", Some(department)).await?;
        Ok(response.map(|e| e.department))
    }

    /// Updates a department.
    pub async fn update(&self, id: u64, department: &DepartmentModel) -> Result<Response<Department>> {
        let response = self
            .client
            .put::<DepartmentEnvelope, _>(&format!("departments/{}", id), Some(department))
            .await?;
        Ok(response.map(|e| e.department))
    }

    /// Deletes a department.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("departments/{}", id)).await
    }
}
