use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::{NewRole, Role};
use crate::schema::roles;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RolePayload {
    pub name: Option<String>,
    pub permission_level: Option<i32>,
    pub description: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = roles, treat_none_as_null = true)]
struct RoleChangeset {
    name: String,
    permission_level: i32,
    description: Option<String>,
}

pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let mut conn = state.db()?;
    let rows: Vec<Role> = roles::table.order(roles::id.desc()).load(&mut conn)?;
    Ok(Json(rows))
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<i32>,
) -> AppResult<Json<Role>> {
    let mut conn = state.db()?;
    let role: Option<Role> = roles::table.find(role_id).first(&mut conn).optional()?;

    match role {
        Some(role) => Ok(Json(role)),
        None => Err(AppError::not_found("Role not found")),
    }
}

pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<RolePayload>,
) -> AppResult<(StatusCode, Json<Role>)> {
    let new_role = NewRole {
        name: payload.name.unwrap_or_default(),
        permission_level: payload.permission_level.unwrap_or(0),
        description: payload.description,
    };

    let mut conn = state.db()?;
    let role: Role = diesel::insert_into(roles::table)
        .values(&new_role)
        .get_result(&mut conn)?;

    Ok((StatusCode::CREATED, Json(role)))
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(role_id): Path<i32>,
    Json(payload): Json<RolePayload>,
) -> AppResult<Json<Role>> {
    let changeset = RoleChangeset {
        name: payload.name.unwrap_or_default(),
        permission_level: payload.permission_level.unwrap_or(0),
        description: payload.description,
    };

    let mut conn = state.db()?;
    let updated: Option<Role> = diesel::update(roles::table.find(role_id))
        .set(&changeset)
        .get_result(&mut conn)
        .optional()?;

    match updated {
        Some(role) => Ok(Json(role)),
        None => Err(AppError::not_found("Role not found")),
    }
}

pub async fn delete_role(
    State(state): State<AppState>,
    Path(role_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let mut conn = state.db()?;

    let deleted: Option<Role> = diesel::delete(roles::table.find(role_id))
        .get_result(&mut conn)
        .optional()?;

    match deleted {
        Some(role) => Ok(Json(json!({
            "message": "Role deleted",
            "role": role,
        }))),
        None => Err(AppError::not_found("Role not found")),
    }
}
