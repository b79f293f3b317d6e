//! Problems with their notes, tasks and time entries.

use crate::client::{Client, Response, Result};
use crate::models::{
    CreateProblemModel, CreateTaskModel, CreateTimeEntryModel, ListOptions, ListProblemsOptions, Note, NoteModel,
    Notes, Problem, ProblemEnvelope, Problems, Task, Tasks, TimeEntries, TimeEntry, UpdateProblemModel,
    UpdateTaskModel,
};

use super::children::Children;
use super::put_action;

/// Operations on `problems`.
#[derive(Debug, Clone, Copy)]
pub struct ProblemService<'a> {
    client: &'a Client,
}

impl<'a> ProblemService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn children(&self, problem_id: u64) -> Children<'a> {
        Children::new(self.client, "problems", problem_id)
    }

    /// Gets a problem by ID.
    pub async fn get(&self, id: u64) -> Result<Response<Problem>> {
        let response = self.client.get::<ProblemEnvelope>(&format!("problems/{}", id)).await?;
        Ok(response.map(|e| e.problem))
    }

    /// Lists problems.
    pub async fn list(&self, opts: Option<&ListProblemsOptions>) -> Result<Response<Problems>> {
        self.client.list("problems", opts).await
    }

    /// Creates a problem.
    pub async fn create(&self, problem: &CreateProblemModel) -> Result<Response<Problem>> {
        let response = self.client.post::<ProblemEnvelope, _>("problems", Some(problem)).await?;
        Ok(response.map(|e| e.problem))
    }

    /// Updates a problem.
    pub async fn update(&self, id: u64, problem: &UpdateProblemModel) -> Result<Response<Problem>> {
        let response = self
            .client
            .put::<ProblemEnvelope, _>(&format!("problems/{}", id), Some(problem))
            .await?;
        Ok(response.map(|e| e.problem))
    }

    /// Moves a problem to the trash.
    pub async fn delete(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("problems/{}", id)).await
    }

    /// Restores a trashed problem.
    pub async fn restore(&self, id: u64) -> Result<Response<bool>> {
        put_action(self.client, &format!("problems/{}/restore", id)).await
    }

    /// Gets one note of a problem.
    pub async fn get_note(&self, problem_id: u64, note_id: u64) -> Result<Response<Note>> {
        self.children(problem_id).get_note(note_id).await
    }

    /// Lists the notes of a problem.
    pub async fn list_notes(&self, problem_id: u64, opts: Option<&ListOptions>) -> Result<Response<Notes>> {
        self.children(problem_id).list_notes(opts).await
    }

    /// Adds a note.
    pub async fn create_note(&self, problem_id: u64, note: &NoteModel) -> Result<Response<Note>> {
        self.children(problem_id).create_note(note).await
    }

    /// Edits a note.
    pub async fn update_note(&self, problem_id: u64, note_id: u64, note: &NoteModel) -> Result<Response<Note>> {
        self.children(problem_id).update_note(note_id, note).await
    }

    /// Deletes a note.
    pub async fn delete_note(&self, problem_id: u64, note_id: u64) -> Result<Response<bool>> {
        self.children(problem_id).delete_note(note_id).await
    }

    /// Gets one task of a problem.
    pub async fn get_task(&self, problem_id: u64, task_id: u64) -> Result<Response<Task>> {
        self.children(problem_id).get_task(task_id).await
    }

    /// Lists the tasks of a problem.
    pub async fn list_tasks(&self, problem_id: u64, opts: Option<&ListOptions>) -> Result<Response<Tasks>> {
        self.children(problem_id).list_tasks(opts).await
    }

    /// Adds a task.
    pub async fn create_task(&self, problem_id: u64, task: &CreateTaskModel) -> Result<Response<Task>> {
        self.children(problem_id).create_task(task).await
    }

    /// Updates a task.
    pub async fn update_task(&self, problem_id: u64, task_id: u64, task: &UpdateTaskModel) -> Result<Response<Task>> {
        self.children(problem_id).update_task(task_id, task).await
    }

    /// Deletes a task.
    pub async fn delete_task(&self, problem_id: u64, task_id: u64) -> Result<Response<bool>> {
        self.children(problem_id).delete_task(task_id).await
    }

    /// Gets one time entry of a problem.
    pub async fn get_time_entry(&self, problem_id: u64, entry_id: u64) -> Result<Response<TimeEntry>> {
        self.children(problem_id).get_time_entry(entry_id).await
    }

    /// Lists the time logged against a problem.
    pub async fn list_time_entries(
        &self,
        problem_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Response<TimeEntries>> {
        self.children(problem_id).list_time_entries(opts).await
    }

    /// Logs time against a problem.
    pub async fn create_time_entry(
        &self,
        problem_id: u64,
        entry: &CreateTimeEntryModel,
    ) -> Result<Response<TimeEntry>> {
        self.children(problem_id).create_time_entry(entry).await
    }

    /// Deletes a time entry.
    pub async fn delete_time_entry(&self, problem_id: u64, entry_id: u64) -> Result<Response<bool>> {
        self.children(problem_id).delete_time_entry(entry_id).await
    }
}
