//! Employee form draft
//!
//! In-progress copy of a record (or an empty template) plus its validation
//! rules, mirroring the edit form a UI presents. Validation failures are
//! caught here, before any remote call.

use chrono::Utc;
use serde_json::Value;
use shared::{Employee, EmployeeDraft, EmployeeUpdate};
use validator::Validate;

/// Pending edit draft with client-side validation rules
#[derive(Debug, Clone, Validate)]
pub struct EmployeeForm {
    #[validate(length(min = 3, message = "Full name must be at least 3 characters"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: f64,
    #[validate(length(min = 1, message = "Hire date is required"))]
    pub hire_date: String,
}

impl Default for EmployeeForm {
    /// Empty template with the form defaults (salary 90000, hired today)
    fn default() -> Self {
        Self {
            full_name: String::new(),
            role: String::new(),
            department: String::new(),
            email: String::new(),
            salary: 90_000.0,
            hire_date: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl EmployeeForm {
    /// Pre-fill from an existing record for editing
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            full_name: employee.full_name.clone(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            email: employee.email.clone(),
            salary: employee.salary,
            hire_date: employee.hire_date.clone(),
        }
    }

    /// Trimmed create payload
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            full_name: Some(self.full_name.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            department: Some(self.department.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            salary: Some(Value::from(self.salary)),
            hire_date: Some(self.hire_date.clone()),
        }
    }

    /// Trimmed full-field update payload
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            full_name: Some(self.full_name.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            department: Some(self.department.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            salary: Some(Value::from(self.salary)),
            hire_date: Some(self.hire_date.clone()),
        }
    }
}
