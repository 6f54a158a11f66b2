use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Comment, NewComment};
use crate::schema::{comments, employees};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AddCommentRequest {
    pub author_id: Option<i32>,
    pub content: Option<String>,
}

/// Comment row enriched with the author's name. The join is a left join:
/// author_id may be null or point at a deleted employee.
#[derive(Serialize)]
pub struct CommentWithAuthor {
    pub id: i32,
    pub task_id: i32,
    pub author_id: Option<i32>,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> AppResult<Json<Vec<CommentWithAuthor>>> {
    let mut conn = state.db()?;

    let rows: Vec<(Comment, Option<String>, Option<String>)> = comments::table
        .left_join(employees::table)
        .filter(comments::task_id.eq(task_id))
        .order(comments::created_at.asc())
        .select((
            Comment::as_select(),
            employees::first_name.nullable(),
            employees::last_name.nullable(),
        ))
        .load(&mut conn)?;

    let response = rows
        .into_iter()
        .map(|(comment, first_name, last_name)| CommentWithAuthor {
            id: comment.id,
            task_id: comment.task_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
            first_name,
            last_name,
        })
        .collect();

    Ok(Json(response))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(payload): Json<AddCommentRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let content = match payload.content.as_deref().map(str::trim) {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => return Err(AppError::bad_request("Content is required")),
    };

    let new_comment = NewComment {
        task_id,
        author_id: payload.author_id,
        content,
    };

    let mut conn = state.db()?;
    let comment: Comment = diesel::insert_into(comments::table)
        .values(&new_comment)
        .get_result(&mut conn)?;

    Ok((StatusCode::CREATED, Json(comment)))
}
