//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as stored and served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique id, assigned once at creation and never changed
    pub id: u64,
    pub full_name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub salary: f64,
    /// ISO 8601 calendar date (YYYY-MM-DD)
    pub hire_date: String,
}

/// Create employee payload
///
/// Permissive by design: every field is optional, unknown fields are
/// ignored, and missing fields normalize to defaults instead of being
/// rejected. `salary` accepts any JSON value and is coerced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub salary: Option<serde_json::Value>,
    pub hire_date: Option<String>,
}

/// Update employee payload
///
/// Partial semantics: only the fields present in the request are applied.
/// The id is never part of the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub salary: Option<serde_json::Value>,
    pub hire_date: Option<String>,
}

impl EmployeeDraft {
    /// Normalize the draft into a full record under the given id
    ///
    /// 文本字段去除首尾空白，缺失字段归一化为空串；
    /// salary 经 [`coerce_salary`] 归一化；hireDate 缺失时取当天 (UTC)
    pub fn into_employee(self, id: u64) -> Employee {
        Employee {
            id,
            full_name: trimmed_or_empty(self.full_name),
            role: trimmed_or_empty(self.role),
            department: trimmed_or_empty(self.department),
            email: trimmed_or_empty(self.email),
            salary: coerce_salary(self.salary.as_ref()),
            hire_date: self.hire_date.unwrap_or_else(today),
        }
    }
}

impl EmployeeUpdate {
    /// Apply the present fields onto an existing record
    ///
    /// Text fields are applied verbatim; salary is coerced. Absent fields
    /// keep their prior values, and the id is never touched.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(v) = self.full_name {
            employee.full_name = v;
        }
        if let Some(v) = self.role {
            employee.role = v;
        }
        if let Some(v) = self.department {
            employee.department = v;
        }
        if let Some(v) = self.email {
            employee.email = v;
        }
        if let Some(v) = self.salary {
            employee.salary = coerce_salary(Some(&v));
        }
        if let Some(v) = self.hire_date {
            employee.hire_date = v;
        }
    }
}

/// Normalize-or-default step for the salary field
///
/// A JSON number is taken as-is, a numeric string is parsed, anything else
/// (missing, non-numeric text, bool, null, ...) coerces to 0.0.
pub fn coerce_salary(value: Option<&serde_json::Value>) -> f64 {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn trimmed_or_empty(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Current UTC calendar date, ISO 8601
fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
