//! In-memory client state: collections fetched wholesale from the API plus
//! page-lifetime scratch notes that are never persisted.

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};

use crate::client::api::{ApiClient, ApiError};
use crate::models::{Employee, Role, Task};

/// One resource's fetched rows plus an inline banner for the last failure.
/// A failed refresh leaves the prior items untouched.
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    banner: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            banner: None,
        }
    }
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    fn apply(&mut self, result: Result<Vec<T>, ApiError>, resource: &str) {
        match result {
            Ok(items) => {
                self.items = items;
                self.banner = None;
            }
            Err(err) => {
                tracing::warn!(resource, error = %err, "refresh failed");
                self.banner = Some(format!("Failed to load {resource}."));
            }
        }
    }
}

/// Scratch note attached to a row for the lifetime of the page. Vanishes on
/// reload; distinct from the persisted comments table.
#[derive(Debug, Clone)]
pub struct Note {
    pub text: String,
    pub noted_at: NaiveDateTime,
}

#[derive(Debug, Default)]
pub struct NoteBook {
    notes: HashMap<i32, Vec<Note>>,
}

impl NoteBook {
    /// Blank input is ignored after trimming.
    pub fn add(&mut self, row_id: i32, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.notes.entry(row_id).or_default().push(Note {
            text: trimmed.to_string(),
            noted_at: Local::now().naive_local(),
        });
    }

    pub fn for_row(&self, row_id: i32) -> &[Note] {
        self.notes.get(&row_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Everything a page session holds: the three fetched collections and the
/// ephemeral notebooks for the task and employee tables.
#[derive(Default)]
pub struct Workspace {
    pub tasks: Collection<Task>,
    pub employees: Collection<Employee>,
    pub roles: Collection<Role>,
    pub task_notes: NoteBook,
    pub employee_notes: NoteBook,
}

impl Workspace {
    pub async fn refresh_tasks(&mut self, api: &ApiClient) {
        self.tasks.apply(api.list_tasks(None, None).await, "tasks");
    }

    pub async fn refresh_employees(&mut self, api: &ApiClient) {
        self.employees.apply(api.list_employees().await, "employees");
    }

    pub async fn refresh_roles(&mut self, api: &ApiClient) {
        self.roles.apply(api.list_roles().await, "roles");
    }
}
