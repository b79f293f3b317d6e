//! SLA policies.

use crate::client::{Client, Response, Result};
use crate::models::SlaPolicies;

/// Read operations on `sla_policies`.
#[derive(Debug, Clone, Copy)]
pub struct SlaPolicyService<'a> {
    client: &'a Client,
}

impl<'a> SlaPolicyService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every SLA policy of the account.
    pub async fn list(&self) -> Result<Response<SlaPolicies>> {
        self.client.get("sla_policies").await
    }
}
