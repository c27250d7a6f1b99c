//! Response DTOs for the server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for a successful save (POST /api/save)
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    /// Always true on the success path
    pub success: bool,
    /// The freshly minted build id
    pub id: String,
}

impl SaveResponse {
    /// Creates a new SaveResponse for a minted id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: id.into(),
        }
    }
}

/// Failure body shared by the save and load endpoints
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    /// Always false
    pub success: bool,
    /// Generic human-readable message
    pub message: String,
}

impl FailureResponse {
    /// Creates a new FailureResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Error body for the cache-fronted proxy endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
