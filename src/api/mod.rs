//! API Module
//!
//! HTTP handlers and routing for the server REST API.
//!
//! # Endpoints
//! - `POST /api/save` - Persist a build payload
//! - `GET /api/load/:id` - Load a build payload by share id
//! - `GET /api/user/*` - Cached per-user upstream lookups
//! - `GET /api/meta/*` - Cached metadata lookups and collection dumps
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
