//! Tickets with their conversations, activities, tasks and time entries.

use crate::client::{Client, Response, Result};
use crate::models::{
    Conversations, CreateTaskModel, CreateTicketModel, CreateTimeEntryModel, ListOptions, ListTicketsOptions, Task,
    Tasks, Ticket, TicketActivities, TicketEnvelope, Tickets, TimeEntries, TimeEntry, UpdateTaskModel,
    UpdateTicketModel,
};

use super::children::Children;
use super::put_action;

/// Operations on `tickets`.
#[derive(Debug, Clone, Copy)]
pub struct TicketService<'a> {
    client: &'a Client,
}

impl<'a> TicketService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn children(&self, ticket_id: u64) -> Children<'a> {
        Children::new(self.client, "tickets", ticket_id)
    }

    /// Gets a ticket by ID.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let ticket = fs.tickets().get(42).await?.into_data();
    /// println!("#{} {} [{}]", ticket.id, ticket.subject.unwrap_or_default(), ticket.status_label());
    /// ```
    pub async fn get(&self, id: u64) -> Result<Response<Ticket>> {
        let response = self.client.get::<TicketEnvelope>(&format!("tickets/{}", id)).await?;
        Ok(response.map(|e| e.ticket))
    }

    /// Lists tickets.
    ///
    /// Without filters the API returns tickets created in the last 30 days.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let opts = ListTicketsOptions::new().with_email("user@example.com").with_page(1, 50);
    /// let tickets = fs.tickets().list(Some(&opts)).await?.into_data().tickets;
    /// ```
    pub async fn list(&self, opts: Option<&ListTicketsOptions>) -> Result<Response<Tickets>> {
        self.client.list("tickets", opts).await
    }

    /// Raises a ticket.
    pub async fn create(&self, ticket: &CreateTicketModel) -> Result<Response<Ticket>> {
        let response = self.client.post::<TicketEnvelope, _>("tickets", Some(ticket)).await?;
        Ok(response.map(|e| e.ticket))
    }

    /// Updates a ticket.
    pub async fn update(&self, id: u64, ticket: &UpdateTicketModel) -> Result<Response<Ticket>> {
        let response = self
            .client
            .put::<TicketEnvelope, _>(&format!("tickets/{}", id), Some(ticket))
            .await?;
        Ok(response.map(|e| e.ticket))
    }

    /// Moves a ticket to the trash.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("tickets/{}", id)).await
    }

    /// Restores a trashed ticket.
    pub async fn restore(&self, id: u64) -> Result<Response<bool>> {
        put_action(self.client, &format!("tickets/{}/restore", id)).await
    }

    /// Removes one attachment from a ticket.
    pub async fn delete_attachment(&self, ticket_id: u64, attachment_id: u64) -> Result<Response<bool>> {
        self.client
            .delete(&format!("tickets/{}/attachments/{}", ticket_id, attachment_id))
            .await
    }

    /// Lists the audit trail of a ticket.
    pub async fn activities(&self, ticket_id: u64) -> Result<Response<TicketActivities>> {
        self.client.get(&format!("tickets/{}/activities", ticket_id)).await
    }

    /// Lists the replies and notes on a ticket.
    pub async fn conversations(&self, ticket_id: u64, opts: Option<&ListOptions>) -> Result<Response<Conversations>> {
        self.client
            .list(&format!("tickets/{}/conversations", ticket_id), opts)
            .await
    }

    /// Gets one task of a ticket.
    pub async fn get_task(&self, ticket_id: u64, task_id: u64) -> Result<Response<Task>> {
        self.children(ticket_id).get_task(task_id).await
    }

    /// Lists the tasks of a ticket.
    pub async fn list_tasks(&self, ticket_id: u64, opts: Option<&ListOptions>) -> Result<Response<Tasks>> {
        self.children(ticket_id).list_tasks(opts).await
    }

    /// Adds a task.
    pub async fn create_task(&self, ticket_id: u64, task: &CreateTaskModel) -> Result<Response<Task>> {
        self.children(ticket_id).create_task(task).await
    }

    /// Updates a task.
    pub async fn update_task(&self, ticket_id: u64, task_id: u64, task: &UpdateTaskModel) -> Result<Response<Task>> {
        self.children(ticket_id).update_task(task_id, task).await
    }

    /// Deletes a task.
    pub async fn delete_task(&self, ticket_id: u64, task_id: u64) -> Result<Response<bool>> {
        self.children(ticket_id).delete_task(task_id).await
    }

    /// Gets one time entry of a ticket.
    pub async fn get_time_entry(&self, ticket_id: u64, entry_id: u64) -> Result<Response<TimeEntry>> {
        self.children(ticket_id).get_time_entry(entry_id).await
    }

    /// Lists the time logged against a ticket.
    pub async fn list_time_entries(&self, ticket_id: u64, opts: Option<&ListOptions>) -> Result<Response<TimeEntries>> {
        self.children(ticket_id).list_time_entries(opts).await
    }

    /// Logs time against a ticket.
    pub async fn create_time_entry(&self, ticket_id: u64, entry: &CreateTimeEntryModel) -> Result<Response<TimeEntry>> {
        self.children(ticket_id).create_time_entry(entry).await
    }

    /// Deletes a time entry.
    pub async fn delete_time_entry(&self, ticket_id: u64, entry_id: u64) -> Result<Response<bool>> {
        self.children(ticket_id).delete_time_entry(entry_id).await
    }
}
