//! Changes and their notes.

use crate::client::{Client, Response, Result};
use crate::models::{
    Change, ChangeEnvelope, Changes, CreateChangeModel, ListChangesOptions, ListOptions, Note, NoteModel, Notes,
    UpdateChangeModel,
};

use super::children::Children;
use super::put_action;

/// Operations on `changes`.
#[derive(Debug, Clone, Copy)]
pub struct ChangeService<'a> {
    client: &'a Client,
}

impl<'a> ChangeService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn children(&self, change_id: u64) -> Children<'a> {
        Children::new(self.client, "changes", change_id)
    }

    /// Gets a change by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Change>> {
        let response = self.client.get::<ChangeEnvelope>(&format!("changes/{}", id)).await?;
        Ok(response.map(|e| e.change))
    }

    /// Lists changes, optionally by predefined filter, requester or update time.
    pub async fn list(&self, opts: Option<&ListChangesOptions>) -> Result<Response<Changes>> {
        self.client.list("changes", opts).await
    }

    /// Creates a change.
    pub async fn create(&self, change: &CreateChangeModel) -> Result<Response<Change>> {
        let response = self.client.post::<ChangeEnvelope, _>("changes", Some(change)).await?;
        Ok(response.map(|e| e.change))
    }

    /// Updates a change.
    pub async fn update(&self, id: u64, change: &UpdateChangeModel) -> Result<Response<Change>> {
        let response = self
            .client
            .put::<ChangeEnvelope, _>(&format!("changes/{}", id), Some(change))
            .await?;
        Ok(response.map(|e| e.change))
    }

    /// Moves a change to the trash.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("changes/{}", id)).await
    }

    /// Restores a trashed change.
    pub async fn restore(&self, id: u64) -> Result<Response<bool>> {
        put_action(self.client, &format!("changes/{}/restore", id)).await
    }

    /// Gets one note of a change.
    pub async fn get_note(&self, change_id: u64, note_id: u64) -> Result<Response<Note>> {
        self.children(change_id).get_note(note_id).await
    }

    /// Lists the notes of a change.
    pub async fn list_notes(&self, change_id: u64, opts: Option<&ListOptions>) -> Result<Response<Notes>> {
        self.children(change_id).list_notes(opts).await
    }

    /// Adds a note to a change.
    pub async fn create_note(&self, change_id: u64, note: &NoteModel) -> Result<Response<Note>> {
        self.children(change_id).create_note(note).await
    }

    /// Edits a note.
    pub async fn update_note(&self, change_id: u64, note_id: u64, note: &NoteModel) -> Result<Response<Note>> {
        self.children(change_id).update_note(note_id, note).await
    }

    /// Deletes a note.
    pub async fn delete_note(&self, change_id: u64, note_id: u64) -> Result<Response<bool>> {
        self.children(change_id).delete_note(note_id).await
    }
}
