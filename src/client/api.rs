use chrono::{NaiveDate, NaiveDateTime};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Comment, Employee, Role, Task};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<i32>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub role_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleFields {
    pub name: String,
    pub permission_level: i32,
    pub description: Option<String>,
}

#[derive(Serialize)]
struct AddCommentFields<'a> {
    author_id: Option<i32>,
    content: &'a str,
}

/// A task comment as listed by the server, author name joined in.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskComment {
    pub id: i32,
    pub task_id: i32,
    pub author_id: Option<i32>,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin wrapper over the REST surface. Every call is independent and
/// fire-and-forget: no retries, cancellation, or deduplication.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_tasks(
        &self,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> ApiResult<Vec<Task>> {
        let mut request = self.http.get(self.url("/api/tasks"));
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }
        if let Some(priority) = priority {
            request = request.query(&[("priority", priority)]);
        }
        Self::parse(request.send().await?).await
    }

    pub async fn create_task(&self, fields: &TaskFields) -> ApiResult<Task> {
        let response = self
            .http
            .post(self.url("/api/tasks"))
            .json(fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn update_task(&self, id: i32, fields: &TaskFields) -> ApiResult<Task> {
        let response = self
            .http
            .put(self.url(&format!("/api/tasks/{id}")))
            .json(fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_task(&self, id: i32) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn list_comments(&self, task_id: i32) -> ApiResult<Vec<TaskComment>> {
        let response = self
            .http
            .get(self.url(&format!("/api/tasks/{task_id}/comments")))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn add_comment(
        &self,
        task_id: i32,
        author_id: Option<i32>,
        content: &str,
    ) -> ApiResult<Comment> {
        let response = self
            .http
            .post(self.url(&format!("/api/tasks/{task_id}/comments")))
            .json(&AddCommentFields { author_id, content })
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let response = self.http.get(self.url("/api/employees")).send().await?;
        Self::parse(response).await
    }

    pub async fn get_employee(&self, id: i32) -> ApiResult<Employee> {
        let response = self
            .http
            .get(self.url(&format!("/api/employees/{id}")))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn create_employee(&self, fields: &EmployeeFields) -> ApiResult<Employee> {
        let response = self
            .http
            .post(self.url("/api/employees"))
            .json(fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn update_employee(&self, id: i32, fields: &EmployeeFields) -> ApiResult<Employee> {
        let response = self
            .http
            .put(self.url(&format!("/api/employees/{id}")))
            .json(fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_employee(&self, id: i32) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/employees/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn list_roles(&self) -> ApiResult<Vec<Role>> {
        let response = self.http.get(self.url("/api/roles")).send().await?;
        Self::parse(response).await
    }

    pub async fn get_role(&self, id: i32) -> ApiResult<Role> {
        let response = self
            .http
            .get(self.url(&format!("/api/roles/{id}")))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn create_role(&self, fields: &RoleFields) -> ApiResult<Role> {
        let response = self
            .http
            .post(self.url("/api/roles"))
            .json(fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn update_role(&self, id: i32, fields: &RoleFields) -> ApiResult<Role> {
        let response = self
            .http
            .put(self.url(&format!("/api/roles/{id}")))
            .json(fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_role(&self, id: i32) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/roles/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(ApiError::Status { status, message })
    }
}
