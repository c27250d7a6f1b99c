//! Error types for the proxy and build store
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for the server.
#[derive(Error, Debug)]
pub enum AppError {
    /// No build stored under the given id
    #[error("No data found for id {0}")]
    NotFound(String),

    /// Insert hit the primary-key constraint on the builds table
    #[error("Duplicate build id: {0}")]
    DuplicateId(String),

    /// Id generation retries exhausted without finding a free slot
    #[error("Could not generate a unique build id after {0} attempts")]
    IdSpaceExhausted(usize),

    /// Queried entity absent from the upstream collection
    #[error("{entity} with ID {id} not found")]
    UpstreamNotFound { entity: &'static str, id: String },

    /// Transport/timeout/non-2xx failure talking to the upstream API
    #[error("Upstream request for {context} failed: {source}")]
    Upstream {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Database-level failure (pool checkout, query, schema)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
// Two body shapes on the wire: the save/load endpoints answer with
// {success, message} and the proxy endpoints with {error}. Which shape
// applies follows from the variant, since store errors only arise on
// save/load and upstream errors only on proxy routes.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "message": "Data not found" })),
            )
                .into_response(),
            AppError::DuplicateId(_) | AppError::IdSpaceExhausted(_) | AppError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to save data" })),
            )
                .into_response(),
            AppError::UpstreamNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::Upstream { .. } | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the server.
pub type Result<T> = std::result::Result<T, AppError>;
