//! Request and Response models for the server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    DescendantQuery, ModuleQuery, OuidQuery, SaveRequest, StatQuery, TitleQuery, UserQuery,
    WeaponQuery,
};
pub use responses::{ErrorResponse, FailureResponse, HealthResponse, SaveResponse};
