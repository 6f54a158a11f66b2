//! Pure view derivation: (source collection, criteria) -> derived ordered
//! view. Recomputed in full on every change; no incremental update.

use std::cmp::Ordering;

use crate::models::{Employee, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column sort state. Toggling the active key flips direction; selecting a
/// new key resets to ascending.
#[derive(Debug, Clone, Copy)]
pub struct SortState<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<K: PartialEq + Copy> SortState<K> {
    pub fn toggle(&mut self, key: K) {
        if self.key == Some(key) {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// One key per sortable column in the task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    Title,
    Status,
    Priority,
    DueDate,
    UpdatedAt,
    AssignedTo,
}

/// One key per sortable column in the employee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSortKey {
    Id,
    FirstName,
    JobTitle,
    Department,
    Email,
    Phone,
    HireDate,
    IsActive,
}

/// Criteria for the task table. `None` status/priority means "all".
#[derive(Debug, Clone, Default)]
pub struct TaskCriteria {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: String,
    pub sort: SortState<TaskSortKey>,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeCriteria {
    pub search: String,
    pub sort: SortState<EmployeeSortKey>,
}

pub fn derive_task_view(tasks: &[Task], criteria: &TaskCriteria) -> Vec<Task> {
    let needle = criteria.search.trim().to_lowercase();

    let mut rows: Vec<Task> = tasks
        .iter()
        .filter(|task| match criteria.status.as_deref() {
            Some(status) => task.status == status,
            None => true,
        })
        .filter(|task| match criteria.priority.as_deref() {
            Some(priority) => task.priority == priority,
            None => true,
        })
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort.key {
        rows.sort_by(|a, b| directed(compare_tasks(a, b, key), criteria.sort.direction));
    }
    rows
}

pub fn derive_employee_view(employees: &[Employee], criteria: &EmployeeCriteria) -> Vec<Employee> {
    let needle = criteria.search.trim().to_lowercase();

    let mut rows: Vec<Employee> = employees
        .iter()
        .filter(|employee| needle.is_empty() || employee_matches(employee, &needle))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort.key {
        rows.sort_by(|a, b| directed(compare_employees(a, b, key), criteria.sort.direction));
    }
    rows
}

fn employee_matches(employee: &Employee, needle: &str) -> bool {
    let full_name = format!("{} {}", employee.first_name, employee.last_name).to_lowercase();
    full_name.contains(needle)
        || employee.email.to_lowercase().contains(needle)
        || employee.job_title.to_lowercase().contains(needle)
}

// Nullable fields order None before Some ascending.
fn compare_tasks(a: &Task, b: &Task, key: TaskSortKey) -> Ordering {
    match key {
        TaskSortKey::Title => a.title.cmp(&b.title),
        TaskSortKey::Status => a.status.cmp(&b.status),
        TaskSortKey::Priority => a.priority.cmp(&b.priority),
        TaskSortKey::DueDate => a.due_date.cmp(&b.due_date),
        TaskSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        TaskSortKey::AssignedTo => a.assigned_to.cmp(&b.assigned_to),
    }
}

fn compare_employees(a: &Employee, b: &Employee, key: EmployeeSortKey) -> Ordering {
    match key {
        EmployeeSortKey::Id => a.id.cmp(&b.id),
        EmployeeSortKey::FirstName => a.first_name.cmp(&b.first_name),
        EmployeeSortKey::JobTitle => a.job_title.cmp(&b.job_title),
        EmployeeSortKey::Department => a.department.cmp(&b.department),
        EmployeeSortKey::Email => a.email.cmp(&b.email),
        EmployeeSortKey::Phone => a.phone.cmp(&b.phone),
        EmployeeSortKey::HireDate => a.hire_date.cmp(&b.hire_date),
        // Inactive rows group before active ones ascending.
        EmployeeSortKey::IsActive => a.is_active.cmp(&b.is_active),
    }
}

// sort_by is stable, so equal keys keep their relative input order either way.
fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
