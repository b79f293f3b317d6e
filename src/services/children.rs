//! Notes, tasks and time entries nested under a parent record.
//!
//! Tickets, changes, problems and releases expose these under
//! `{parent}/{id}/notes`, `/tasks` and `/time_entries` with identical
//! shapes; the parent services delegate here.

use crate::client::{Client, Response, Result};
use crate::models::{
    CreateTaskModel, CreateTimeEntryModel, ListOptions, Note, NoteEnvelope, NoteModel, Notes, Task, TaskEnvelope,
    Tasks, TimeEntries, TimeEntry, TimeEntryEnvelope, UpdateTaskModel,
};

pub(crate) struct Children<'a> {
    client: &'a Client,
    parent: String,
}

impl<'a> Children<'a> {
    /// `collection` is the parent's path prefix, e.g. `problems`.
    pub(crate) fn new(client: &'a Client, collection: &str, id: u64) -> Self {
        Self {
            client,
            parent: format!("{}/{}", collection, id),
        }
    }

    fn path(&self, kind: &str, id: Option<u64>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.parent, kind, id),
            None => format!("{}/{}", self.parent, kind),
        }
    }

    pub(crate) async fn get_note(&self, id: u64) -> Result<Response<Note>> {
        let response = self.client.get::<NoteEnvelope>(&self.path("notes", Some(id))).await?;
        Ok(response.map(|e| e.note))
    }

    pub(crate) async fn list_notes(&self, opts: Option<&ListOptions>) -> Result<Response<Notes>> {
        self.client.list(&self.path("notes", None), opts).await
    }

    pub(crate) async fn create_note(&self, note: &NoteModel) -> Result<Response<Note>> {
        let response = self
            .client
            .post::<NoteEnvelope, _>(&self.path("notes", None), Some(note))
            .await?;
        Ok(response.map(|e| e.note))
    }

    pub(crate) async fn update_note(&self, id: u64, note: &NoteModel) -> Result<Response<Note>> {
        let response = self
            .client
            .put::<NoteEnvelope, _>(&self.path("notes", Some(id)), Some(note))
            .await?;
        Ok(response.map(|e| e.note))
    }

    pub(crate) async fn delete_note(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&self.path("notes", Some(id))).await
    }

    pub(crate) async fn get_task(&self, id: u64) -> Result<Response<Task>> {
        let response = self.client.get::<TaskEnvelope>(&self.path("tasks", Some(id))).await?;
        Ok(response.map(|e| e.task))
    }

    pub(crate) async fn list_tasks(&self, opts: Option<&ListOptions>) -> Result<Response<Tasks>> {
        self.client.list(&self.path("tasks", None), opts).await
    }

    pub(crate) async fn create_task(&self, task: &CreateTaskModel) -> Result<Response<Task>> {
        let response = self
            .client
            .post::<TaskEnvelope, _>(&self.path("tasks", None), Some(task))
            .await?;
        Ok(response.map(|e| e.task))
    }

    pub(crate) async fn update_task(&self, id: u64, task: &UpdateTaskModel) -> Result<Response<Task>> {
        let response = self
            .client
            .put::<TaskEnvelope, _>(&self.path("tasks", Some(id)), Some(task))
            .await?;
        Ok(response.map(|e| e.task))
    }

    pub(crate) async fn delete_task(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&self.path("tasks", Some(id))).await
    }

    pub(crate) async fn get_time_entry(&self, id: u64) -> Result<Response<TimeEntry>> {
        let response = self
            .client
            .get::<TimeEntryEnvelope>(&self.path("time_entries", Some(id)))
            .await?;
        Ok(response.map(|e| e.time_entry))
    }

    pub(crate) async fn list_time_entries(&self, opts: Option<&ListOptions>) -> Result<Response<TimeEntries>> {
        self.client.list(&self.path("time_entries", None), opts).await
    }

    /// The body is wrapped as `{"time_entry": {...}}`.
    pub(crate) async fn create_time_entry(&self, entry: &CreateTimeEntryModel) -> Result<Response<TimeEntry>> {
        let body = TimeEntryEnvelope { time_entry: entry };
        let response = self
            .client
            .post::<TimeEntryEnvelope, _>(&self.path("time_entries", None), Some(&body))
            .await?;
        Ok(response.map(|e| e.time_entry))
    }

    pub(crate) async fn delete_time_entry(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&self.path("time_entries", Some(id))).await
    }
}
