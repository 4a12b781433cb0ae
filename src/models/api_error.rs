//! Error body returned by the API on failed requests.

use serde::{Deserialize, Serialize};

/// Wire shape of a failure body, e.g. `{"detail": "Not found."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable reason.
    pub detail: String,
}
