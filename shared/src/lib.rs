//! Shared types for the Roster employee directory
//!
//! Common types used by both roster-server and roster-client: the employee
//! record, the permissive create/update payloads with their
//! normalize-or-default rules, and the wire error body.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Employee, EmployeeDraft, EmployeeUpdate, coerce_salary};
pub use response::ErrorBody;
pub use serde::{Deserialize, Serialize};
