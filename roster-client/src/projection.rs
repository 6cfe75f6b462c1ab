//! Filter/sort projection
//!
//! Pure view logic: given the cached records plus the current search term,
//! sort field and direction, produce the ordered sequence a UI renders.
//! The source collection is never mutated.

use std::cmp::Ordering;

use shared::Employee;

/// Sortable / searchable record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    FullName,
    Role,
    Department,
    Email,
    Salary,
    HireDate,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// 反转方向
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// 投影状态 (仅客户端，临时)
///
/// Created with UI-load defaults, mutated by user interaction, never
/// persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::FullName,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl ViewState {
    /// Select a sort field: the active field flips direction, a new field
    /// resets to ascending
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// 反转当前排序方向
    pub fn flip_direction(&mut self) {
        self.sort_direction = self.sort_direction.flipped();
    }
}

/// Produce the filtered, ordered view of `records`
pub fn project(records: &[Employee], view: &ViewState) -> Vec<Employee> {
    let term = view.search_term.trim().to_lowercase();

    let mut result: Vec<Employee> = if term.is_empty() {
        records.to_vec()
    } else {
        records
            .iter()
            .filter(|e| haystack(e).contains(&term))
            .cloned()
            .collect()
    };

    // sort_by is stable: equal keys keep their input order in both directions
    result.sort_by(|a, b| {
        let ordering = compare_by(view.sort_field, a, b);
        match view.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    result
}

/// Numeric fields compare numerically, text fields case-insensitively
fn compare_by(field: SortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Salary => a.salary.total_cmp(&b.salary),
        SortField::FullName => fold(&a.full_name).cmp(&fold(&b.full_name)),
        SortField::Role => fold(&a.role).cmp(&fold(&b.role)),
        SortField::Department => fold(&a.department).cmp(&fold(&b.department)),
        SortField::Email => fold(&a.email).cmp(&fold(&b.email)),
        SortField::HireDate => fold(&a.hire_date).cmp(&fold(&b.hire_date)),
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// 所有字段拼接后小写，用于子串搜索
fn haystack(employee: &Employee) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        employee.id,
        employee.full_name,
        employee.role,
        employee.department,
        employee.email,
        employee.salary,
        employee.hire_date,
    )
    .to_lowercase()
}
