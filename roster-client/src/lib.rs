//! Roster Client - 员工目录客户端
//!
//! Typed HTTP client for the roster server plus the view-side logic a UI
//! renders from: the filter/sort projection, the pending-edit form and the
//! sync state machine that keeps the local cache consistent with the last
//! known server state.

pub mod error;
pub mod form;
pub mod http;
pub mod projection;
pub mod state;

// Re-exports
pub use error::{ClientError, ClientResult};
pub use form::EmployeeForm;
pub use http::RosterClient;
pub use projection::{SortDirection, SortField, ViewState, project};
pub use state::{DirectoryState, Draft, LoadPhase};
