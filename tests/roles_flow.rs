mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{acquire_db_lock, body_to_vec, TestApp};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct RoleResponse {
    id: i32,
    name: String,
    permission_level: i32,
    description: Option<String>,
}

#[tokio::test]
async fn role_crud_round_trip() -> Result<()> {
    let _lock = acquire_db_lock().await;
    let app = TestApp::new().await?;

    let created = app
        .post_json(
            "/api/roles",
            &json!({
                "name": "Engineer",
                "permission_level": 2,
                "description": "Builds things"
            }),
        )
        .await?;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = body_to_vec(created.into_body()).await?;
    let role: RoleResponse = serde_json::from_slice(&body)?;
    assert!(role.id > 0);
    assert_eq!(role.name, "Engineer");
    assert_eq!(role.permission_level, 2);

    let fetched = app.get(&format!("/api/roles/{}", role.id)).await?;
    assert_eq!(fetched.status(), StatusCode::OK);

    // Full replace: description omitted, so it is nulled.
    let updated = app
        .put_json(
            &format!("/api/roles/{}", role.id),
            &json!({ "name": "Senior Engineer", "permission_level": 3 }),
        )
        .await?;
    assert_eq!(updated.status(), StatusCode::OK);
    let body = body_to_vec(updated.into_body()).await?;
    let replaced: RoleResponse = serde_json::from_slice(&body)?;
    assert_eq!(replaced.name, "Senior Engineer");
    assert_eq!(replaced.permission_level, 3);
    assert_eq!(replaced.description, None);

    let deleted = app.delete(&format!("/api/roles/{}", role.id)).await?;
    assert_eq!(deleted.status(), StatusCode::OK);
    let body = body_to_vec(deleted.into_body()).await?;
    let payload: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(payload["message"], "Role deleted");
    assert_eq!(payload["role"]["name"], "Senior Engineer");

    let missing = app.get(&format!("/api/roles/{}", role.id)).await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    app.cleanup().await?;
    Ok(())
}

#[tokio::test]
async fn deleting_a_role_clears_employee_reference() -> Result<()> {
    let _lock = acquire_db_lock().await;
    let app = TestApp::new().await?;

    let created = app
        .post_json("/api/roles", &json!({ "name": "Temp", "permission_level": 1 }))
        .await?;
    let body = body_to_vec(created.into_body()).await?;
    let role: RoleResponse = serde_json::from_slice(&body)?;

    let employee = app
        .post_json(
            "/api/employees",
            &json!({
                "first_name": "Role",
                "last_name": "Holder",
                "email": "holder@example.com",
                "job_title": "Temp",
                "role_id": role.id
            }),
        )
        .await?;
    assert_eq!(employee.status(), StatusCode::CREATED);

    let deleted = app.delete(&format!("/api/roles/{}", role.id)).await?;
    assert_eq!(deleted.status(), StatusCode::OK);

    let listed = app.get("/api/employees").await?;
    let body = body_to_vec(listed.into_body()).await?;
    let employees: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
    assert_eq!(employees.len(), 1);
    assert!(employees[0]["role_id"].is_null());
    // The stored job_title text survives as the fallback display value.
    assert_eq!(employees[0]["job_title"], "Temp");

    app.cleanup().await?;
    Ok(())
}
