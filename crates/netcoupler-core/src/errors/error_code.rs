//! Stable error codes for callers that cross a language or process boundary.

/// Every error enum implements this to expose a structured code string.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_COLUMN").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_COLUMN: &str = "INVALID_COLUMN";
pub const TABLE_ERROR: &str = "TABLE_ERROR";
pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const MODEL_FIT_FAILURE: &str = "MODEL_FIT_FAILURE";
pub const INVALID_NODE: &str = "INVALID_NODE";
pub const LINK_ERROR: &str = "LINK_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
