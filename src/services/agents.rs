//! Agents and agent roles.

use crate::client::{Client, Response, Result};
use crate::models::{
    Agent, AgentEnvelope, AgentRole, AgentRoleEnvelope, AgentRoles, Agents, CreateAgentModel, ListAgentsOptions,
    ListOptions, UpdateAgentModel,
};

/// Operations on `agents` and `roles`.
#[derive(Debug, Clone, Copy)]
pub struct AgentService<'a> {
    client: &'a Client,
}

impl<'a> AgentService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets an agent by ID.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let agent = fs.agents().get(7).await?.into_data();
    /// println!("{}", agent.display_name());
    /// ```
    pub async fn get(&self, id: u64) -> Result<Response<Agent>> {
        let response = self.client.get::<AgentEnvelope>(&format!("agents/{}", id)).await?;
        Ok(response.map(|e| e.agent))
    }

    /// Lists agents, optionally filtered by email, active flag or state.
    pub async fn list(&self, opts: Option<&ListAgentsOptions>) -> Result<Response<Agents>> {
        self.client.list("agents", opts).await
    }

    /// Creates an agent.
    pub async fn create(&self, agent: &CreateAgentModel) -> Result<Response<Agent>> {
        let response = self.client.post::<AgentEnvelope, _>("agents", Some(agent)).await?;
        Ok(response.map(|e| e.agent))
    }

    /// Updates an agent.
    pub async fn update(&self, id: u64, agent: &UpdateAgentModel) -> Result<Response<Agent>> {
        let response = self
            .client
            .put::<AgentEnvelope, _>(&format!("agents/{}", id), Some(agent))
            .await?;
        Ok(response.map(|e| e.agent))
    }

    /// Permanently deletes an agent and their personal data.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("agents/{}/forget", id)).await
    }

    /// Deactivates an agent, turning them into a requester.
    pub async fn deactivate(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("agents/{}", id)).await
    }

    /// Reactivates a deactivated agent.
    pub async fn reactivate(&self, id: u64) -> Result<Response<Agent>> {
        let response = self
            .client
            .put::<AgentEnvelope, ()>(&format!("agents/{}/reactivate", id), None)
            .await?;
        Ok(response.map(|e| e.agent))
    }

    /// Gets a role by ID.
    pub async fn get_role(&self, id: u64) -> Result<Response<AgentRole>> {
        let response = self.client.get::<AgentRoleEnvelope>(&format!("roles/{}", id)).await?;
        Ok(response.map(|e| e.role))
    }

    /// Lists the roles agents can be assigned.
    pub async fn list_roles(&self, opts: Option<&ListOptions>) -> Result<Response<AgentRoles>> {
        self.client.list("roles", opts).await
    }
}
