//! Form state for the create/edit dialogs. Validation mirrors the server
//! rules so obviously bad input never leaves the client.

use chrono::NaiveDate;
use thiserror::Error;

use crate::client::api::{EmployeeFields, TaskFields};
use crate::models::{Employee, Role};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
}

#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<i32>,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<TaskFields, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        Ok(TaskFields {
            title: title.to_string(),
            description: self.description.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            due_date: self.due_date,
            assigned_to: self.assigned_to,
            comments: None,
        })
    }
}

/// Employee form. Job title is not free text: it is chosen from the role
/// list, which sets role_id and mirrors the role name into job_title.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub is_active: bool,
    pub role_id: Option<i32>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    /// Prefill from an existing row. The displayed job title is resolved by
    /// role_id lookup, falling back to the stored text when the role is gone.
    pub fn from_employee(employee: &Employee, roles: &[Role]) -> Self {
        Self {
            id: Some(employee.id),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            job_title: display_job_title(employee, roles).to_string(),
            department: employee.department.clone(),
            phone: employee.phone.clone(),
            hire_date: employee.hire_date,
            is_active: employee.is_active,
            role_id: employee.role_id,
        }
    }

    pub fn select_role(&mut self, role: &Role) {
        self.role_id = Some(role.id);
        self.job_title = role.name.clone();
    }

    /// Outgoing payload. job_title is still sent alongside role_id; the
    /// column is redundant but kept for schema compatibility.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            job_title: self.job_title.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            hire_date: self.hire_date,
            is_active: Some(self.is_active),
            role_id: self.role_id,
        }
    }
}

pub fn display_job_title<'a>(employee: &'a Employee, roles: &'a [Role]) -> &'a str {
    roles
        .iter()
        .find(|role| Some(role.id) == employee.role_id)
        .map(|role| role.name.as_str())
        .unwrap_or(&employee.job_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: i32, name: &str) -> Role {
        Role {
            id,
            name: name.to_string(),
            permission_level: 1,
            description: None,
        }
    }

    fn employee(role_id: Option<i32>, job_title: &str) -> Employee {
        Employee {
            id: 10,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            job_title: job_title.to_string(),
            department: None,
            phone: None,
            hire_date: None,
            is_active: true,
            role_id,
            created_at: "2024-01-01T00:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn blank_title_is_rejected_before_any_network_call() {
        let draft = TaskDraft {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(FormError::MissingTitle));
    }

    #[test]
    fn valid_draft_trims_the_title() {
        let draft = TaskDraft {
            title: "  Ship v1  ".to_string(),
            ..Default::default()
        };
        let fields = draft.validate().unwrap();
        assert_eq!(fields.title, "Ship v1");
    }

    #[test]
    fn selecting_a_role_sets_id_and_mirrors_the_name() {
        let mut form = EmployeeForm::new();
        form.select_role(&role(3, "Engineer"));
        assert_eq!(form.role_id, Some(3));
        assert_eq!(form.job_title, "Engineer");

        let fields = form.fields();
        assert_eq!(fields.role_id, Some(3));
        assert_eq!(fields.job_title, "Engineer");
    }

    #[test]
    fn displayed_title_is_resolved_by_role_lookup() {
        let roles = vec![role(3, "Engineer")];
        let row = employee(Some(3), "stale text");
        assert_eq!(display_job_title(&row, &roles), "Engineer");
    }

    #[test]
    fn displayed_title_falls_back_when_role_is_gone() {
        let roles = vec![role(3, "Engineer")];
        let row = employee(Some(99), "Archivist");
        assert_eq!(display_job_title(&row, &roles), "Archivist");

        let no_role = employee(None, "Contractor");
        assert_eq!(display_job_title(&no_role, &roles), "Contractor");
    }
}
