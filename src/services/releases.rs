//! Releases with their notes, tasks and time entries.

use crate::client::{Client, Response, Result};
use crate::models::{
    CreateReleaseModel, CreateTaskModel, CreateTimeEntryModel, ListOptions, ListReleasesOptions, Note, NoteModel,
    Notes, Release, ReleaseEnvelope, Releases, Task, Tasks, TimeEntries, TimeEntry, UpdateReleaseModel,
    UpdateTaskModel,
};

use super::children::Children;
use super::put_action;

/// Operations on `releases`.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseService<'a> {
    client: &'a Client,
}

impl<'a> ReleaseService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn children(&self, release_id: u64) -> Children<'a> {
        Children::new(self.client, "releases", release_id)
    }

    /// Gets a release by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Release>> {
        let response = self.client.get::<ReleaseEnvelope>(&format!("releases/{}", id)).await?;
        Ok(response.map(|e| e.release))
    }

    /// Lists releases, optionally through a named view.
    pub async fn list(&self, opts: Option<&ListReleasesOptions>) -> Result<Response<Releases>> {
        self.client.list("releases", opts).await
    }

    /// Creates a release.
    pub async fn create(&self, release: &CreateReleaseModel) -> Result<Response<Release>> {
        let response = self.client.post::<ReleaseEnvelope, _>("releases", Some(release)).await?;
        Ok(response.map(|e| e.release))
    }

    /// Updates a release.
    pub async fn update(&self, id: u64, release: &UpdateReleaseModel) -> Result<Response<Release>> {
        let response = self
            .client
            .put::<ReleaseEnvelope, _>(&format!("releases/{}", id), Some(release))
            .await?;
        Ok(response.map(|e| e.release))
    }

    /// Moves a release to the trash.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("releases/{}", id)).await
    }

    /// Restores a trashed release.
    pub async fn restore(&self, id: u64) -> Result<Response<bool>> {
        put_action(self.client, &format!("releases/{}/restore", id)).await
    }

    /// Gets one note of a release.
    pub async fn get_note(&self, release_id: u64, note_id: u64) -> Result<Response<Note>> {
        self.children(release_id).get_note(note_id).await
    }

    /// Lists the notes of a release.
    pub async fn list_notes(&self, release_id: u64, opts: Option<&ListOptions>) -> Result<Response<Notes>> {
        self.children(release_id).list_notes(opts).await
    }

    /// Adds a note.
    pub async fn create_note(&self, release_id: u64, note: &NoteModel) -> Result<Response<Note>> {
        self.children(release_id).create_note(note).await
    }

    /// Edits a note.
    pub async fn update_note(&self, release_id: u64, note_id: u64, note: &NoteModel) -> Result<Response<Note>> {
        self.children(release_id).update_note(note_id, note).await
    }

    /// Deletes a note.
    pub async fn delete_note(&self, release_id: u64, note_id: u64) -> Result<Response<bool>> {
        self.children(release_id).delete_note(note_id).await
    }

    /// Gets one task of a release.
    pub async fn get_task(&self, release_id: u64, task_id: u64) -> Result<Response<Task>> {
        self.children(release_id).get_task(task_id).await
    }

    /// Lists the tasks of a release.
    pub async fn list_tasks(&self, release_id: u64, opts: Option<&ListOptions>) -> Result<Response<Tasks>> {
        self.children(release_id).list_tasks(opts).await
    }

    /// Adds a task.
    pub async fn create_task(&self, release_id: u64, task: &CreateTaskModel) -> Result<Response<Task>> {
        self.children(release_id).create_task(task).await
    }

    /// Updates a task.
    pub async fn update_task(&self, release_id: u64, task_id: u64, task: &UpdateTaskModel) -> Result<Response<Task>> {
        self.children(release_id).update_task(task_id, task).await
    }

    /// Deletes a task.
    pub async fn delete_task(&self, release_id: u64, task_id: u64) -> Result<Response<bool>> {
        self.children(release_id).delete_task(task_id).await
    }

    /// Gets one time entry of a release.
    pub async fn get_time_entry(&self, release_id: u64, entry_id: u64) -> Result<Response<TimeEntry>> {
        self.children(release_id).get_time_entry(entry_id).await
    }

    /// Lists the time logged against a release.
    pub async fn list_time_entries(
        &self,
        release_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Response<TimeEntries>> {
        self.children(release_id).list_time_entries(opts).await
    }

    /// Logs time against a release.
    pub async fn create_time_entry(
        &self,
        release_id: u64,
        entry: &CreateTimeEntryModel,
    ) -> Result<Response<TimeEntry>> {
        self.children(release_id).create_time_entry(entry).await
    }

    /// Deletes a time entry.
    pub async fn delete_time_entry(&self, release_id: u64, entry_id: u64) -> Result<Response<bool>> {
        self.children(release_id).delete_time_entry(entry_id).await
    }
}
