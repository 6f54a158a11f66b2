use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, NewEmployee};
use crate::schema::employees;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EmployeePayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub role_id: Option<i32>,
}

/// Full-row replace: omitted nullable fields become NULL, never preserved.
#[derive(AsChangeset)]
#[diesel(table_name = employees, treat_none_as_null = true)]
struct EmployeeChangeset {
    first_name: String,
    last_name: String,
    email: String,
    job_title: String,
    department: Option<String>,
    phone: Option<String>,
    hire_date: Option<NaiveDate>,
    is_active: bool,
    role_id: Option<i32>,
}

pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let mut conn = state.db()?;
    let rows: Vec<Employee> = employees::table
        .order(employees::id.desc())
        .load(&mut conn)?;
    Ok(Json(rows))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> AppResult<Json<Employee>> {
    let mut conn = state.db()?;
    let employee: Option<Employee> = employees::table
        .find(employee_id)
        .first(&mut conn)
        .optional()?;

    match employee {
        Some(employee) => Ok(Json(employee)),
        None => Err(AppError::not_found("Employee not found")),
    }
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    // is_active is not accepted on create; the column default (true) applies.
    let new_employee = NewEmployee {
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        job_title: payload.job_title.unwrap_or_default(),
        department: payload.department,
        phone: payload.phone,
        hire_date: payload.hire_date,
        role_id: payload.role_id,
    };

    let mut conn = state.db()?;
    let employee: Employee = diesel::insert_into(employees::table)
        .values(&new_employee)
        .get_result(&mut conn)?;

    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<Json<Employee>> {
    let changeset = EmployeeChangeset {
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        job_title: payload.job_title.unwrap_or_default(),
        department: payload.department,
        phone: payload.phone,
        hire_date: payload.hire_date,
        is_active: payload.is_active.unwrap_or(true),
        role_id: payload.role_id,
    };

    let mut conn = state.db()?;
    let updated: Option<Employee> = diesel::update(employees::table.find(employee_id))
        .set(&changeset)
        .get_result(&mut conn)
        .optional()?;

    match updated {
        Some(employee) => Ok(Json(employee)),
        None => Err(AppError::not_found("Employee not found")),
    }
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let mut conn = state.db()?;

    let deleted: Option<Employee> = diesel::delete(employees::table.find(employee_id))
        .get_result(&mut conn)
        .optional()?;

    match deleted {
        Some(employee) => Ok(Json(json!({
            "message": "Employee deleted",
            "employee": employee,
        }))),
        None => Err(AppError::not_found("Employee not found")),
    }
}
