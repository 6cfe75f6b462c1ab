//! API Response types
//!
//! Error body shared by every endpoint:
//!
//! ```json
//! {
//!     "error": "not_found",
//!     "message": "Employee 7 not found"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Wire shape of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind (not_found, storage_error, ...)
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Underlying cause (5xx only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
