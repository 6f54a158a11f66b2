use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::{NewTask, Task};
use crate::schema::tasks;
use crate::state::AppState;

const DEFAULT_STATUS: &str = "todo";
const DEFAULT_PRIORITY: &str = "medium";

#[derive(Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Shared body shape for POST and PUT. Everything is optional at the serde
/// level so a missing title surfaces as a 400, not a deserialization reject.
#[derive(Deserialize)]
pub struct TaskPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<i32>,
    pub comments: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = tasks, treat_none_as_null = true)]
struct TaskChangeset {
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    due_date: Option<NaiveDate>,
    assigned_to: Option<i32>,
    comments: Option<String>,
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListQuery>,
) -> AppResult<Json<Vec<Task>>> {
    let mut conn = state.db()?;

    let mut query = tasks::table.into_boxed();
    if let Some(status) = params.status {
        query = query.filter(tasks::status.eq(status));
    }
    if let Some(priority) = params.priority {
        query = query.filter(tasks::priority.eq(priority));
    }

    let rows: Vec<Task> = query.order(tasks::id.desc()).load(&mut conn)?;
    Ok(Json(rows))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let title = require_title(&payload)?;

    let new_task = NewTask {
        title,
        description: payload.description,
        status: payload
            .status
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        priority: payload
            .priority
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
        due_date: payload.due_date,
        assigned_to: payload.assigned_to,
        comments: payload.comments,
    };

    let mut conn = state.db()?;
    let task: Task = diesel::insert_into(tasks::table)
        .values(&new_task)
        .get_result(&mut conn)?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(payload): Json<TaskPayload>,
) -> AppResult<Json<Task>> {
    let title = require_title(&payload)?;

    let changeset = TaskChangeset {
        title,
        description: payload.description,
        status: payload
            .status
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        priority: payload
            .priority
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
        due_date: payload.due_date,
        assigned_to: payload.assigned_to,
        comments: payload.comments,
    };

    let mut conn = state.db()?;
    let updated: Option<Task> = diesel::update(tasks::table.find(task_id))
        .set((&changeset, tasks::updated_at.eq(diesel::dsl::now)))
        .get_result(&mut conn)
        .optional()?;

    match updated {
        Some(task) => Ok(Json(task)),
        None => Err(AppError::not_found("Task not found")),
    }
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let mut conn = state.db()?;

    let deleted: Option<Task> = diesel::delete(tasks::table.find(task_id))
        .get_result(&mut conn)
        .optional()?;

    if deleted.is_none() {
        return Err(AppError::not_found("Task not found"));
    }
    Ok(Json(json!({ "message": "Task deleted" })))
}

fn require_title(payload: &TaskPayload) -> AppResult<String> {
    match payload.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(AppError::bad_request("Title is required")),
    }
}
